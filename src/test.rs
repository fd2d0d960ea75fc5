// end-to-end runs of the hex line driver over in-memory streams

use std::io::Cursor;

use crate::driver::{run, Config, InvalidLine, Summary};
use crate::hash_result::{HashErrorKind, HashResult};

const EMPTY: &str = "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855";
const ABC: &str = "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD";
const ABCDBCDE: &str = "248D6A61D20638B8E5C026930C3E6039A33CE45964FF2167F6ECEDD419DB06C1";
const ZERO_BYTE: &str = "6E340B9CFFB37A989CA544E6BB780A2C78901D3FB33738768511A30617AFA01D";

fn run_str(input: &str, config: &Config) -> (HashResult<Summary>, String) {
    let mut out = Vec::new();
    let ret = run(Cursor::new(input.as_bytes()), &mut out, config);
    (ret, String::from_utf8(out).unwrap())
}

fn expect_lines(digests: &[&str]) -> String {
    digests.iter().map(|d| format!("{}\n", d)).collect()
}

#[test]
fn test_known_answers() {
    let input = "\n616263\n6162636462636465636465666465666765666768666768696768696a68696a6b696a6b6c6a6b6c6d6b6c6d6e6c6d6e6f6d6e6f706e6f7071\n00\n";
    let (ret, out) = run_str(input, &Config::default());

    assert_eq!(ret.unwrap(), Summary { hashed: 4, skipped: 0 });
    assert_eq!(out, expect_lines(&[EMPTY, ABC, ABCDBCDE, ZERO_BYTE]));
}

#[test]
fn test_million_a_line() {
    let input = "61".repeat(1_000_000);
    let (ret, out) = run_str(&input, &Config::default());

    assert_eq!(ret.unwrap().hashed, 1);
    assert_eq!(
        out,
        "CDC76E5C9914FB9281A1C7E284D73E67F1809A48A497200E046D39CCC7112CD0\n"
    );
}

#[test]
fn test_empty_input() {
    let (ret, out) = run_str("", &Config::default());
    assert_eq!(ret.unwrap(), Summary::default());
    assert_eq!(out, "");
}

#[test]
fn test_terminators() {
    // CRLF and a last line without newline
    let (ret, out) = run_str("616263\r\n\r\n616263", &Config::default());
    assert_eq!(ret.unwrap().hashed, 3);
    assert_eq!(out, expect_lines(&[ABC, EMPTY, ABC]));

    let (_, upper) = run_str("DEADBEEF\n", &Config::default());
    let (_, lower) = run_str("deadbeef\n", &Config::default());
    assert_eq!(upper, lower);
}

#[test]
fn test_lone_cr_ends_line() {
    let (ret, out) = run_str("616263\r00\n", &Config::default());
    assert_eq!(ret.unwrap().hashed, 2);
    assert_eq!(out, expect_lines(&[ABC, ZERO_BYTE]));

    let (ret, out) = run_str("\r616263\r\n00\r", &Config::default());
    assert_eq!(ret.unwrap().hashed, 3);
    assert_eq!(out, expect_lines(&[EMPTY, ABC, ZERO_BYTE]));
}

#[test]
fn test_abort_on_invalid() {
    let (ret, out) = run_str("616263\n6162 63\n00\n", &Config::default());

    let err = ret.unwrap_err();
    assert_eq!(err.kind, HashErrorKind::InvalidHex);
    assert!(err.desc.starts_with("line 2: "), "{}", err.desc);
    // output before the bad line is kept
    assert_eq!(out, expect_lines(&[ABC]));
}

#[test]
fn test_abort_on_odd_length() {
    let (ret, out) = run_str("0\n", &Config::default());
    assert_eq!(ret.unwrap_err().kind, HashErrorKind::InvalidHex);
    assert_eq!(out, "");
}

#[test]
fn test_skip_invalid() {
    let config = Config {
        on_invalid: InvalidLine::Skip,
    };
    let (ret, out) = run_str("xyz\n616263\n616\n\n00 \n00\n", &config);

    assert_eq!(ret.unwrap(), Summary { hashed: 3, skipped: 3 });
    assert_eq!(out, expect_lines(&[ABC, EMPTY, ZERO_BYTE]));
}

#[test]
fn test_each_line_is_hashed_independently() {
    let (_, joined) = run_str("616263\n616263\n", &Config::default());
    assert_eq!(joined, expect_lines(&[ABC, ABC]));
}
