// Copyright 2022 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module is used to read a knapsack instance from a file. The expected
//! format is the usual one: a first line with the number of items and the
//! capacity of the sack, then one `profit weight` pair per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;

use knapdp::Knapsack;

/// This enumeration simply groups the kind of errors that might occur when
/// reading a knapsack instance from file. There can be io errors (file
/// unavailable ?), format errors (e.g. the file is not an instance but
/// contains the text of your next paper), parse int errors (a variant of the
/// format error: the parser expected an integer but got something else), or
/// an instance that parses fine but violates the input contract of the
/// solvers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got ... something else
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The file was not properly formatted.
    #[error("ill formed instance")]
    Format,
    /// The file parses fine but does not describe a solvable instance.
    #[error("invalid instance: {0}")]
    Invalid(#[from] knapdp::InvalidInput),
}

/// This function is used to read a knapsack instance from file. It returns
/// either a validated instance if everything went on well or an error
/// describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Knapsack, Error> {
    let f = File::open(fname)?;
    let f = BufReader::new(f);
    read_from(f)
}

fn read_from<R: BufRead>(input: R) -> Result<Knapsack, Error> {
    let mut data = vec![];
    for line in input.lines() {
        let line = line?;
        for token in line.split_ascii_whitespace() {
            data.push(token.parse::<isize>()?);
        }
    }

    if data.len() < 2 {
        return Err(Error::Format);
    }
    let nb_items = usize::try_from(data[0]).map_err(|_| Error::Format)?;
    let capacity = data[1];
    if data.len() != 2 + 2 * nb_items {
        return Err(Error::Format);
    }

    let mut profit = Vec::with_capacity(nb_items);
    let mut weight = Vec::with_capacity(nb_items);
    for pair in data[2..].chunks_exact(2) {
        profit.push(pair[0]);
        weight.push(pair[1]);
    }

    Ok(Knapsack::new(weight, profit, capacity)?)
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_io_utils {
    use std::io::Cursor;

    use crate::io_utils::{read_from, Error};

    #[test]
    fn it_reads_a_well_formed_instance() {
        let text = "4 7\n1 1\n4 3\n5 4\n7 5\n";
        let instance = read_from(Cursor::new(text)).unwrap();

        assert_eq!(4, instance.nb_items());
        assert_eq!(7, instance.capacity);
        assert_eq!(vec![1, 4, 5, 7], instance.profit);
        assert_eq!(vec![1, 3, 4, 5], instance.weight);
    }

    #[test]
    fn an_empty_file_is_ill_formed() {
        assert!(matches!(read_from(Cursor::new("")), Err(Error::Format)));
    }

    #[test]
    fn a_missing_item_line_is_ill_formed() {
        let text = "4 7\n1 1\n4 3\n5 4\n";
        assert!(matches!(read_from(Cursor::new(text)), Err(Error::Format)));
    }

    #[test]
    fn garbage_is_reported_as_a_parse_error() {
        let text = "4 seven\n1 1\n4 3\n5 4\n7 5\n";
        assert!(matches!(read_from(Cursor::new(text)), Err(Error::ParseInt(_))));
    }

    #[test]
    fn a_negative_capacity_is_reported_as_an_invalid_instance() {
        let text = "1 -7\n1 1\n";
        assert!(matches!(read_from(Cursor::new(text)), Err(Error::Invalid(_))));
    }
}
