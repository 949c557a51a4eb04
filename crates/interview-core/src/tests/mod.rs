mod analysis;
mod catalog;
mod question;
