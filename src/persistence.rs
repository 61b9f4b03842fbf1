use rusqlite::{Connection, Result, NO_PARAMS};

pub struct MailSummary {
    pub index: u64,
    pub size: u64,
    pub from: String,
    pub subject: String,
    pub date_received: String,
}

pub fn persist_mails(mails: Vec<MailSummary>, db_name: &str) -> Result<()> {
    let mut conn = Connection::open(db_name)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS mails (
            id INTEGER PRIMARY KEY,
            mail_index INTEGER NOT NULL,
            size_octets INTEGER NOT NULL,
            msg_from TEXT NOT NULL,
            subject TEXT NOT NULL,
            date_received TEXT NOT NULL
        )",
        NO_PARAMS,
    )?;

    let tx = conn.transaction()?;
    for mail in mails {
        tx.execute(
            "INSERT INTO mails (mail_index, size_octets, msg_from, subject, date_received)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            &[
                mail.index.to_string(),
                mail.size.to_string(),
                mail.from,
                mail.subject,
                mail.date_received,
            ],
        )?;
    }
    tx.commit()
}
