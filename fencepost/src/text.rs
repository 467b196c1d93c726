//! Reading plain-text number lists
//!
//! Input files are sequences of decimal numbers separated by whitespace or
//! newlines.  A `#` starts a comment that runs to the end of the line.
use crate::Error;
use std::io::Read;

/// Parses every number in the given text
pub fn parse_values(text: &str) -> Result<Vec<f64>, Error> {
    let mut out = vec![];
    for (i, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("");
        for tok in line.split_whitespace() {
            let v = tok.parse::<f64>().map_err(|_| Error::ParseError {
                line: i + 1,
                text: tok.to_owned(),
            })?;
            out.push(v);
        }
    }
    Ok(out)
}

/// Reads and parses every number from the given reader
pub fn read_values<R: Read>(mut r: R) -> Result<Vec<f64>, Error> {
    let mut text = String::new();
    r.read_to_string(&mut text)?;
    parse_values(&text)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let v = parse_values("1 2.5\n# comment\n-3e2   4 # trailing\n\n")
            .unwrap();
        assert_eq!(v, [1.0, 2.5, -300.0, 4.0]);
        assert!(parse_values("").unwrap().is_empty());
    }

    #[test]
    fn parse_error() {
        let e = parse_values("1 2\n3 four\n").unwrap_err();
        match e {
            Error::ParseError { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "four");
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn read() {
        let v = read_values("0.5\n0.25".as_bytes()).unwrap();
        assert_eq!(v, [0.5, 0.25]);
    }
}
