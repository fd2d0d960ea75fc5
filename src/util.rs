use std::io::{self, BufRead};

// consumes one `\n` if it is the next byte.
fn skip_lf<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<()> {
    let next = loop {
        match reader.fill_buf() {
            Ok(available) => break available.first().cloned(),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    };
    if next == Some(b'\n') {
        reader.consume(1);
    }
    Ok(())
}

pub trait BufReadExt: BufRead {
    /// Reads one line into `buf` without its terminator. `\n`, `\r\n` and a
    /// lone `\r` all end a line; anything else, including other whitespace,
    /// is part of it. Returns `false` at end of input. Bytes need not be
    /// valid UTF-8.
    fn read_trimmed_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        let mut read_any = false;

        loop {
            let available = match self.fill_buf() {
                Ok(available) => available,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(read_any);
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    buf.extend_from_slice(&available[..i]);
                    let cr = available[i] == b'\r';
                    self.consume(i + 1);
                    if cr {
                        skip_lf(self)?;
                    }
                    return Ok(true);
                }
                None => {
                    buf.extend_from_slice(available);
                    let used = available.len();
                    self.consume(used);
                    read_any = true;
                }
            }
        }
    }
}

impl<R: BufRead + ?Sized> BufReadExt for R {}
