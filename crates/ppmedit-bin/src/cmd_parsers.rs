/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use ppmedit_core::options::DecoderOptions;

use crate::cmd_args::OPERATIONS;

pub mod global_options;
pub mod operations;

/// One occurrence of an operation on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArgOccurrence {
    /// Argument id, one of [`OPERATIONS`]
    pub id:         String,
    /// How many times the same argument appeared before this one
    pub occurrence: usize,
    index:          usize
}

/// Fill arguments into a Vec according to the
/// order which they were specified in the command line
///
/// Repeated arguments appear once per use, so `-e gray -b solid -e blur`
/// yields `effect`, `border`, `effect`.
pub fn fill_args(options: &ArgMatches) -> Vec<ArgOccurrence> {
    let mut map = Vec::with_capacity(20);

    for id in options.ids() {
        if options.try_get_many::<clap::Id>(id.as_str()).is_ok() {
            // ignore groups
            continue;
        }
        if options.value_source(id.as_str()) != Some(ValueSource::CommandLine) {
            // ignore things not passed via command line
            continue;
        }
        if !OPERATIONS.contains(&id.as_str()) {
            continue;
        }
        let Some(indices) = options.indices_of(id.as_str()) else {
            continue;
        };
        for (occurrence, index) in indices.enumerate() {
            map.push(ArgOccurrence {
                id: id.to_string(),
                occurrence,
                index
            });
        }
    }
    map.sort_by_key(|x| x.index);
    map
}

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(usize::MAX);
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(usize::MAX);
    let strict_mode = options.get_flag("strict");

    DecoderOptions::new_cmd()
        .set_max_height(max_height)
        .set_max_width(max_width)
        .set_strict_mode(strict_mode)
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::{fill_args, get_decoder_options};

    #[test]
    fn operations_keep_command_line_order() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "ppmedit", "-e", "gray", "--debug", "-b", "solid", "-e", "blur", "-c", "binary", "-i",
                "in.ppm"
            ])
            .unwrap();

        let order: Vec<(String, usize)> = fill_args(&matches)
            .into_iter()
            .map(|x| (x.id, x.occurrence))
            .collect();

        assert_eq!(
            order,
            vec![
                ("effect".to_string(), 0),
                ("border".to_string(), 0),
                ("effect".to_string(), 1),
                ("convert".to_string(), 0)
            ]
        );
    }

    #[test]
    fn decoder_options_follow_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from(["ppmedit", "-i", "in.ppm", "--max-width", "20", "--strict"])
            .unwrap();

        let options = get_decoder_options(&matches);

        assert_eq!(options.get_max_width(), 20);
        assert_eq!(options.get_max_height(), 16384);
        assert!(options.get_strict_mode());
    }
}
