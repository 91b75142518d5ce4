//! JSON line encoding

use super::Record;

pub(super) fn encode(record: &Record, buf: &mut Vec<u8>) -> std::io::Result<()> {
    serde_json::to_writer(&mut *buf, record)?;
    Ok(())
}
