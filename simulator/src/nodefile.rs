use std::io::{self, BufRead, Write};

use chord::id::NodeId;

/**
 * Plain-text node list with basic checks to avoid misuse.
 *
 * One decimal node id per line, `\n` after every line including the
 * last. Ids are strictly ascending. No header, no blank lines, no
 * other content. An empty file is a valid empty list.
 */

#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    Parse { line: usize, text: String },
    NotAscending { line: usize },
}

#[derive(Debug)]
pub enum WriteError {
    Io(io::Error),
    NotAscending,
}

impl ToString for ReadError {
    fn to_string(&self) -> String {
        match self {
            ReadError::Io(e) => e.to_string(),
            ReadError::Parse { line, text } =>
                format!("line {}: not a node id: {:?}", line, text),
            ReadError::NotAscending { line } =>
                format!("line {}: ids are not strictly ascending", line),
        }
    }
}

impl ToString for WriteError {
    fn to_string(&self) -> String {
        match self {
            WriteError::Io(e) => e.to_string(),
            WriteError::NotAscending =>
                "ids are not strictly ascending".to_string(),
        }
    }
}

pub fn from_reader(reader: impl BufRead) -> Result<Vec<NodeId>, ReadError> {
    let mut ids: Vec<NodeId> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(ReadError::Io)?;
        let id: NodeId = line.parse()
            .map_err(|_| ReadError::Parse { line: i + 1, text: line.clone() })?;

        if let Some(&last) = ids.last() {
            if id <= last {
                return Err(ReadError::NotAscending { line: i + 1 });
            }
        }
        ids.push(id);
    }
    Ok(ids)
}

pub fn to_writer(mut writer: impl Write, ids: &[NodeId]) -> Result<(), WriteError> {
    if !ids.windows(2).all(|w| w[0] < w[1]) {
        return Err(WriteError::NotAscending);
    }

    for id in ids {
        writeln!(writer, "{}", id).map_err(WriteError::Io)?;
    }
    writer.flush().map_err(WriteError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_id_per_line() {
        let mut out: Vec<u8> = Vec::new();
        to_writer(&mut out, &[1, 3, 4, 7, 9]).unwrap();
        assert_eq!(out, b"1\n3\n4\n7\n9\n");
    }

    #[test]
    fn empty_list_writes_empty_file() {
        let mut out: Vec<u8> = Vec::new();
        to_writer(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn refuses_unsorted_ids() {
        let mut out: Vec<u8> = Vec::new();
        let err = to_writer(&mut out, &[5, 2]).unwrap_err();
        assert!(matches!(err, WriteError::NotAscending));
        assert!(out.is_empty());
    }

    #[test]
    fn reads_what_it_wrote() {
        let ids: Vec<NodeId> = vec![0, 17, 204, 1023];
        let mut out: Vec<u8> = Vec::new();
        to_writer(&mut out, &ids).unwrap();
        assert_eq!(from_reader(out.as_slice()).unwrap(), ids);
    }

    #[test]
    fn reads_empty_file_as_empty_list() {
        assert!(from_reader(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn reports_parse_failures_with_line_number() {
        let err = from_reader(&b"3\nseven\n9\n"[..]).unwrap_err();
        match err {
            ReadError::Parse { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "seven");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_blank_lines() {
        let err = from_reader(&b"3\n\n9\n"[..]).unwrap_err();
        assert!(matches!(err, ReadError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_out_of_order_ids() {
        let err = from_reader(&b"3\n9\n9\n"[..]).unwrap_err();
        assert!(matches!(err, ReadError::NotAscending { line: 3 }));
    }
}
