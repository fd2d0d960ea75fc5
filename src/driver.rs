use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::crypto::sha2::{sha256, DIGEST_LEN};
use crate::hash_result::HashErrorKind::{InvalidHex, IoFailure};
use crate::hash_result::HashResult;
use crate::util::BufReadExt;

/// Where the hex lines come from.
#[derive(Clone, PartialEq, Debug)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `None` and `-` both select stdin.
    pub fn from_arg(arg: Option<&str>) -> Source {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    pub fn open(&self) -> HashResult<Box<dyn BufRead>> {
        match *self {
            Source::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Source::File(ref path) => match File::open(path) {
                Ok(file) => Ok(Box::new(BufReader::new(file))),
                Err(e) => hash_err!(IoFailure, "cannot open {}: {}", path.display(), e),
            },
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(ref path) => write!(f, "{}", path.display()),
        }
    }
}

/// What to do with a line that is not valid hex.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum InvalidLine {
    /// Stop the run with an `InvalidHex` error.
    Abort,
    /// Log a warning, write nothing for the line and go on.
    Skip,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub on_invalid: InvalidLine,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            on_invalid: InvalidLine::Abort,
        }
    }
}

#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Summary {
    pub hashed: usize,
    pub skipped: usize,
}

fn decode(line: &[u8]) -> HashResult<Vec<u8>> {
    match hex::decode(line) {
        Ok(msg) => Ok(msg),
        Err(e) => hash_err!(InvalidHex, "{}", e),
    }
}

/// Reads newline-delimited hex messages.
pub struct HexLineReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> HexLineReader<R> {
    pub fn new(reader: R) -> HexLineReader<R> {
        HexLineReader {
            reader,
            line: Vec::new(),
            line_no: 0,
        }
    }

    /// 1-based number of the last line read, 0 before the first read.
    #[inline]
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Reads and decodes the next line. `Ok(None)` at end of input.
    ///
    /// A line that fails to decode is consumed, so the next call moves on
    /// to the following line.
    pub fn read_message(&mut self) -> HashResult<Option<Vec<u8>>> {
        if !self.reader.read_trimmed_line(&mut self.line)? {
            return Ok(None);
        }
        self.line_no += 1;

        match decode(&self.line) {
            Ok(msg) => Ok(Some(msg)),
            Err(e) => hash_err!(InvalidHex, "line {}: {}", self.line_no, e.desc),
        }
    }
}

/// Writes digests as uppercase hex, one per line.
pub struct DigestWriter<W: Write> {
    writer: W,
}

impl<W: Write> DigestWriter<W> {
    pub fn new(writer: W) -> DigestWriter<W> {
        DigestWriter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write_digest(&mut self, digest: &[u8; DIGEST_LEN]) -> HashResult<()> {
        let mut line = hex::encode_upper(digest);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> HashResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Hashes every line of `input` and writes one digest line per message to
/// `output`. Output already written stays written when a line fails.
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &Config) -> HashResult<Summary> {
    let mut reader = HexLineReader::new(input);
    let mut writer = DigestWriter::new(output);
    let mut summary = Summary::default();

    loop {
        let msg = match reader.read_message() {
            Ok(Some(msg)) => msg,
            Ok(None) => break,
            Err(ref e) if e.kind == InvalidHex && config.on_invalid == InvalidLine::Skip => {
                warn!("skipping {}", e.desc);
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        debug!("line {}: {} bytes", reader.line_no(), msg.len());
        writer.write_digest(&sha256(&msg))?;
        summary.hashed += 1;
    }

    writer.flush()?;
    info!("{} lines hashed, {} skipped", summary.hashed, summary.skipped);

    Ok(summary)
}
