//! Scripted driver for `CircularArray<i32>`.
//!
//! A script is three lines of whitespace separated integers:
//!
//! ```text
//! 6
//! 5 3 8 1 9 3
//! 1 1 1 0 1 4
//! ```
//!
//! The first line is the number of steps `n`, the second holds `n` data
//! values and the third `n` operation codes. Step `i` runs operation
//! `ops[i]` with `data[i]` as its argument (the inserted value, the rank,
//! the bit count or the searched value, depending on the operation).
//!
//! While the array is empty every step except a short dump inserts instead:
//! odd codes at the end, even codes at the front.

use std::io::{self, Write};
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::CircularArray;

/// One scripted operation, numbered by its code in the script file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    /// `0`: insert the value at the front.
    AddFront,
    /// `1`: insert the value at the end.
    AddEnd,
    /// `2`: remove the first element.
    DelFront,
    /// `3`: remove the last element.
    DelEnd,
    /// `4`: quickselect with the value as rank.
    QuickSelect,
    /// `5`: median-of-medians select with the value as rank.
    WorstCaseSelect,
    /// `6`: stable sort.
    StableSort,
    /// `7`: radix sort on the value as bit count.
    RadixSort,
    /// `8`: linear search for the value.
    LinearSearch,
    /// `9`: binary search for the value.
    BinarySearch,
    /// `10`: print size, capacity and every element.
    Dump,
    /// `11`: print size, capacity and elements 2 through 11.
    DumpSmall,
}

const OPS: [Op; 12] = [Op::AddFront, Op::AddEnd, Op::DelFront, Op::DelEnd,
                       Op::QuickSelect, Op::WorstCaseSelect, Op::StableSort, Op::RadixSort,
                       Op::LinearSearch, Op::BinarySearch, Op::Dump, Op::DumpSmall];

impl Op {
    /// Decodes a script operation code.
    pub fn from_code(code: i32) -> Option<Op> {
        usize::try_from(code).ok().and_then(|code| OPS.get(code).copied())
    }

    /// The operation's code in a script file.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Error value for a malformed script.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScriptError {
    /// The named line is absent.
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// A token that does not parse as an integer.
    #[error("{line} line: {token:?} is not a valid integer")]
    BadInteger {
        /// Which line the token is on.
        line: &'static str,
        /// The offending token.
        token: String,
    },

    /// A line with fewer values than the step count.
    #[error("{line} line: expected {expected} values, found {found}")]
    ShortLine {
        /// Which line came up short.
        line: &'static str,
        /// The step count from the first line.
        expected: usize,
        /// How many values the line holds.
        found: usize,
    },

    /// An operation code outside `0..=11`.
    #[error("unknown operation code {code} at step {step}")]
    UnknownOp {
        /// The offending code.
        code: i32,
        /// Zero-based step index.
        step: usize,
    },
}

/// A parsed script: one data value and one operation per step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Script {
    data: Vec<i32>,
    ops: Vec<Op>,
}

fn parse_token<T: FromStr>(line: &'static str, token: &str) -> Result<T, ScriptError> {
    token.parse().map_err(|_| ScriptError::BadInteger { line, token: token.to_owned() })
}

fn parse_values(line: Option<&str>, name: &'static str, n: usize) -> Result<Vec<i32>, ScriptError> {
    let line = match line {
        Some(line) => line,
        None if n == 0 => "",
        None => return Err(ScriptError::MissingLine(name)),
    };
    let values = line.split_whitespace()
        .take(n)
        .map(|token| parse_token(name, token))
        .collect::<Result<Vec<i32>, _>>()?;
    if values.len() < n {
        return Err(ScriptError::ShortLine { line: name, expected: n, found: values.len() });
    }
    Ok(values)
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(text: &str) -> Result<Script, ScriptError> {
        let mut lines = text.lines();
        let n: usize = match lines.next().and_then(|line| line.split_whitespace().next()) {
            Some(token) => parse_token("count", token)?,
            None => return Err(ScriptError::MissingLine("count")),
        };
        let data = parse_values(lines.next(), "data", n)?;
        let ops = parse_values(lines.next(), "operation", n)?
            .into_iter()
            .enumerate()
            .map(|(step, code)| Op::from_code(code).ok_or(ScriptError::UnknownOp { code, step }))
            .collect::<Result<Vec<Op>, _>>()?;
        Ok(Script { data, ops })
    }
}

impl Script {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Runs every step against `array`, writing results to `out`.
    ///
    /// A failing operation (bad rank, bad bit count) prints `error: ...` and
    /// the script carries on; only I/O errors abort the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    /// use cdarray::script::Script;
    ///
    /// let script: Script = "4\n7 2 9 2\n1 1 1 4".parse().unwrap();
    /// let mut array = CircularArray::new();
    /// let mut out = Vec::new();
    /// script.run(&mut array, &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "QuickSelect result is 7\n");
    /// ```
    pub fn run<W: Write>(&self, array: &mut CircularArray<i32>, out: &mut W) -> io::Result<()> {
        for (step, (&op, &value)) in self.ops.iter().zip(&self.data).enumerate() {
            if array.is_empty() {
                match op {
                    Op::DumpSmall => dump_small(array, out)?,
                    _ if op.code() % 2 == 1 => array.add_end(value),
                    _ => array.add_front(value),
                }
            } else {
                apply(op, value, array, out)?;
            }
            debug!("step {}: {:?}({}) -> {:?}", step, op, value, array);
        }
        Ok(())
    }
}

fn apply<W: Write>(op: Op, value: i32, array: &mut CircularArray<i32>, out: &mut W) -> io::Result<()> {
    // negative ranks and bit counts map onto values the array rejects
    let rank = usize::try_from(value).unwrap_or(0);
    let bits = u32::try_from(value).unwrap_or(u32::MAX);

    match op {
        Op::AddFront => array.add_front(value),
        Op::AddEnd => array.add_end(value),
        Op::DelFront => report(array.del_front().map(drop), out)?,
        Op::DelEnd => report(array.del_end().map(drop), out)?,
        Op::QuickSelect => match array.quick_select(rank) {
            Ok(x) => writeln!(out, "QuickSelect result is {}", x)?,
            Err(e) => writeln!(out, "error: {}", e)?,
        },
        Op::WorstCaseSelect => match array.worst_case_select(rank) {
            Ok(x) => writeln!(out, "WCSelect result is {}", x)?,
            Err(e) => writeln!(out, "error: {}", e)?,
        },
        Op::StableSort => array.stable_sort(),
        Op::RadixSort => report(array.radix_sort(bits), out)?,
        Op::LinearSearch => {
            writeln!(out, "linearSearch result is {}", found(array.linear_search(&value)))?
        }
        Op::BinarySearch => {
            writeln!(out, "binSearch result is {}", found(array.binary_search(&value)))?
        }
        Op::Dump => dump(array, out)?,
        Op::DumpSmall => dump_small(array, out)?,
    }
    Ok(())
}

fn report<W: Write>(result: crate::Result<()>, out: &mut W) -> io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => writeln!(out, "error: {}", e),
    }
}

fn found(index: Option<usize>) -> i64 {
    index.map_or(-1, |index| index as i64)
}

fn header<W: Write>(array: &CircularArray<i32>, out: &mut W) -> io::Result<()> {
    writeln!(out, "size is : {}", array.len())?;
    writeln!(out, "capacity is : {}", array.capacity())
}

fn dump<W: Write>(array: &CircularArray<i32>, out: &mut W) -> io::Result<()> {
    header(array, out)?;
    for x in array {
        write!(out, "{} ", x)?;
    }
    writeln!(out)?;
    writeln!(out)
}

fn dump_small<W: Write>(array: &CircularArray<i32>, out: &mut W) -> io::Result<()> {
    header(array, out)?;
    if array.len() > 12 {
        for x in array.iter().skip(2).take(10) {
            write!(out, "{} ", x)?;
        }
    }
    writeln!(out)?;
    writeln!(out)
}
