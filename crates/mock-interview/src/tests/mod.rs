mod app_command;
mod cli;
mod countdown;
