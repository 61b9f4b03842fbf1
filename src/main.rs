mod argp;
mod persistence;

use std::process;

use regex::Regex;
use tracing::{error, info};

use pop3::{Client, PlainAuth};

use crate::persistence::MailSummary;

#[derive(Debug)]
pub struct AppConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub db_name: String,
}

fn main() {
    tracing_subscriber::fmt().init();

    let config = argp::arg_parse();
    if let Err(err) = fetch_mails(&config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn fetch_mails(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("connecting to {}", config.server);
    let mut client = Client::dial(&config.server)?;
    info!("greeting: {}", client.greeting());

    client.login(&PlainAuth::new(&config.username, &config.password))?;
    info!("logged in as {}", config.username);

    let stat = client.stat()?;
    info!(
        "{} mails in the mailbox ({} octets)",
        stat.mail_count, stat.mailbox_size
    );

    let from_re = Regex::new(r"(?m)^From:[ \t]*(.*?)\r?$").unwrap();
    let subject_re = Regex::new(r"(?m)^Subject:[ \t]*(.*?)\r?$").unwrap();
    let date_re = Regex::new(r"(?m)^Date:[ \t]*(.*?)\r?$").unwrap();

    let mut summaries = Vec::new();
    for index in 1..=stat.mail_count as u32 {
        let info = client.list_message(index)?;
        let mail = client.retrieve(index)?;
        summaries.push(MailSummary {
            index: info.index,
            size: info.size,
            from: header_value(&from_re, &mail),
            subject: header_value(&subject_re, &mail),
            date_received: header_value(&date_re, &mail),
        });
    }

    client.quit()?;

    info!(
        "persisting {} mail summaries in {}",
        summaries.len(),
        config.db_name
    );
    persistence::persist_mails(summaries, &config.db_name)?;
    Ok(())
}

fn header_value(re: &Regex, mail: &str) -> String {
    re.captures(mail)
        .and_then(|captures| captures.get(1))
        .map(|field| field.as_str().trim().to_string())
        .unwrap_or_default()
}
