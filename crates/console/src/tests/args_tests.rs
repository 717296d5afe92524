// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use clap::Parser;

use crate::Args;

#[test]
fn test_defaults_use_local_file_and_allow_double_booking() {
    let args: Args = Args::try_parse_from(["gesttransport"]).unwrap();

    assert_eq!(args.database, PathBuf::from("gestransport.db"));
    assert!(!args.in_memory);
    assert!(args.sales_policy().allow_double_booking);
}

#[test]
fn test_flags_are_parsed() {
    let args: Args = Args::try_parse_from([
        "gesttransport",
        "--database",
        "/tmp/agency.db",
        "--in-memory",
        "--forbid-double-booking",
    ])
    .unwrap();

    assert_eq!(args.database, PathBuf::from("/tmp/agency.db"));
    assert!(args.in_memory);
    assert!(!args.sales_policy().allow_double_booking);
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Args::try_parse_from(["gesttransport", "--port", "80"]).is_err());
}
