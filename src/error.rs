use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Sequences of unequal length ({left} vs {right}) cannot be compared position by position.")]
    LengthMismatch { left: usize, right: usize },

    #[error("Barcode name '{name}' is defined twice with different sequences ({first} and {second}).")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    #[error("Flowcell id '{fcid}' is invalid: {reason}.")]
    InvalidFlowcellId { fcid: String, reason: &'static str },

    #[error("Malformed sample sheet record at line {line}{}", Error::format_msg_as_detail(msg))]
    MalformedRecord { line: u64, msg: Option<String> },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    #[cold]
    pub fn malformed_record<M: Into<String>>(line: u64, msg: Option<M>) -> Self {
        Error::MalformedRecord {
            line,
            msg: msg.map(|m| m.into()),
        }
    }

    fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(": {m}"),
            None => String::new(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
