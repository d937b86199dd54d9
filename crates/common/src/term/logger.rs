use std::fmt::Display;

use colored::Colorize;

const BANNER: &str = "ONFT deployer";

pub fn intro() {
    println!("{}", BANNER.cyan().bold());
}

pub fn outro(msg: impl Display) {
    println!("{}", msg.to_string().green().bold());
}

pub fn info(msg: impl Display) {
    println!("{msg}");
}

pub fn step(msg: impl Display) {
    println!("{}", format!("∙ {msg}").dimmed());
}

pub fn warn(msg: impl Display) {
    eprintln!("{}", msg.to_string().yellow());
}

pub fn new_empty_line() {
    println!();
}
