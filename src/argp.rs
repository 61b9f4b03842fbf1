use crate::AppConfig;
use clap::{App, Arg};

pub fn arg_parse() -> AppConfig {
    let matches = App::new("pop3")
        .version("0.1.0")
        .about("A program to fetch mails from a POP3 server and persist their summaries")
        .arg(Arg::with_name("server")
            .short("s")
            .long("server")
            .value_name("HOST:PORT")
            .required(true)
            .takes_value(true))
        .arg(Arg::with_name("username")
            .short("u")
            .long("user")
            .value_name("USERNAME")
            .required(true)
            .takes_value(true))
        .arg(Arg::with_name("password")
            .short("p")
            .long("pass")
            .value_name("PASSWORD")
            .required(true)
            .takes_value(true))
        .arg(Arg::with_name("dbname")
            .short("n")
            .long("dbname")
            .value_name("DATABASE NAME")
            .takes_value(true))
        .get_matches();

    // The first three are `required`, so clap has already bailed out if any
    // of them is missing.
    AppConfig {
        server: matches.value_of("server").unwrap().to_string(),
        username: matches.value_of("username").unwrap().to_string(),
        password: matches.value_of("password").unwrap().to_string(),
        db_name: matches.value_of("dbname").unwrap_or("mails.db").to_string(),
    }
}
