//! Line based command scripts that build a map and query it.
//!
//! ```text
//! # comment
//! intersection 0 0
//! road 0 0 3 4
//! navigate 0 0 3 4
//! weights 0 0
//! adjacency
//! ```

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::{
    graphs::{road_map::RoadMap, Coordinate},
    search::path::{NavigationRequest, Path},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intersection {
        x: Coordinate,
        y: Coordinate,
    },
    Road {
        x1: Coordinate,
        y1: Coordinate,
        x2: Coordinate,
        y2: Coordinate,
    },
    Navigate(NavigationRequest),
    Weights {
        x: Coordinate,
        y: Coordinate,
    },
    Adjacency,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: `{command}` expects {expected} coordinates, found {found}")]
    WrongArity {
        line: usize,
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{value}` is not a valid coordinate")]
    InvalidCoordinate { line: usize, value: String },

    #[error("failed to read script")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab separated intersection per line, `no path` otherwise
    #[default]
    Plain,
    /// One JSON object per navigation
    Json,
}

/// Parses a single line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let coordinates = words
        .map(|value| {
            value
                .parse::<Coordinate>()
                .map_err(|_| ScriptError::InvalidCoordinate {
                    line: line_number,
                    value: value.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let expected = match command {
        "intersection" | "weights" => 2,
        "road" | "navigate" => 4,
        "adjacency" => 0,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line: line_number,
                command: command.to_string(),
            })
        }
    };
    if coordinates.len() != expected {
        return Err(ScriptError::WrongArity {
            line: line_number,
            command: command.to_string(),
            expected,
            found: coordinates.len(),
        });
    }

    let command = match (command, coordinates.as_slice()) {
        ("intersection", &[x, y]) => Command::Intersection { x, y },
        ("weights", &[x, y]) => Command::Weights { x, y },
        ("road", &[x1, y1, x2, y2]) => Command::Road { x1, y1, x2, y2 },
        ("navigate", &[x1, y1, x2, y2]) => {
            Command::Navigate(NavigationRequest::new(x1, y1, x2, y2))
        }
        _ => Command::Adjacency,
    };

    Ok(Some(command))
}

pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, &line?)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

#[derive(Serialize)]
struct NavigationReport<'a> {
    request: &'a NavigationRequest,
    path: Option<&'a Path>,
}

/// A map under construction plus the settings used to print query results.
pub struct Session {
    map: RoadMap,
    format: OutputFormat,
    echo_additions: bool,
}

impl Session {
    pub fn new(format: OutputFormat, echo_additions: bool) -> Session {
        Session {
            map: RoadMap::new(),
            format,
            echo_additions,
        }
    }

    pub fn map(&self) -> &RoadMap {
        &self.map
    }

    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> io::Result<()> {
        debug!("executing {:?}", command);
        match *command {
            Command::Intersection { x, y } => {
                let added = self.map.add_intersection(x, y);
                if self.echo_additions {
                    writeln!(out, "{}", added)?;
                }
            }
            Command::Road { x1, y1, x2, y2 } => {
                let added = self.map.add_road(x1, y1, x2, y2);
                if self.echo_additions {
                    writeln!(out, "{}", added)?;
                }
            }
            Command::Navigate(request) => {
                let NavigationRequest { source, target } = request;
                let path = self.map.navigate(source.x, source.y, target.x, target.y);
                self.write_path(&request, path.as_ref(), out)?;
            }
            Command::Weights { x, y } => match self.map.weight_report(x, y) {
                Some(lines) => {
                    for line in lines {
                        writeln!(out, "{}", line)?;
                    }
                }
                None => writeln!(out, "no path")?,
            },
            Command::Adjacency => {
                for line in self.map.adjacency_report() {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        Ok(())
    }

    fn write_path<W: Write>(
        &self,
        request: &NavigationRequest,
        path: Option<&Path>,
        out: &mut W,
    ) -> io::Result<()> {
        match (self.format, path) {
            (OutputFormat::Plain, Some(path)) => {
                for intersection in &path.intersections {
                    writeln!(out, "{}", intersection)?;
                }
            }
            (OutputFormat::Plain, None) => writeln!(out, "no path")?,
            (OutputFormat::Json, path) => {
                let report = NavigationReport { request, path };
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, script: &str) -> String {
        let commands = parse_script(script.as_bytes()).unwrap();
        let mut out = Vec::new();
        for command in &commands {
            session.execute(command, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(
            parse_line(1, "intersection 3 -4").unwrap(),
            Some(Command::Intersection { x: 3, y: -4 })
        );
        assert_eq!(
            parse_line(1, "road 0 0 3 4").unwrap(),
            Some(Command::Road {
                x1: 0,
                y1: 0,
                x2: 3,
                y2: 4
            })
        );
        assert_eq!(
            parse_line(1, "  navigate 1 2 3 4  # to the harbour").unwrap(),
            Some(Command::Navigate(NavigationRequest::new(1, 2, 3, 4)))
        );
        assert_eq!(
            parse_line(1, "weights 5 5").unwrap(),
            Some(Command::Weights { x: 5, y: 5 })
        );
        assert_eq!(parse_line(1, "adjacency").unwrap(), Some(Command::Adjacency));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(2, "   ").unwrap(), None);
        assert_eq!(parse_line(3, "# intersection 1 1").unwrap(), None);
    }

    #[test]
    fn reports_bad_lines() {
        assert!(matches!(
            parse_line(7, "teleport 1 1"),
            Err(ScriptError::UnknownCommand { line: 7, .. })
        ));
        assert!(matches!(
            parse_line(8, "road 1 1 2"),
            Err(ScriptError::WrongArity {
                line: 8,
                expected: 4,
                found: 3,
                ..
            })
        ));
        assert!(matches!(
            parse_line(9, "intersection 1 north"),
            Err(ScriptError::InvalidCoordinate { line: 9, .. })
        ));
        assert!(matches!(
            parse_line(10, "intersection 1 99999999999"),
            Err(ScriptError::InvalidCoordinate { line: 10, .. })
        ));
    }

    #[test]
    fn prints_path_one_intersection_per_line() {
        let mut session = Session::new(OutputFormat::Plain, false);
        let output = run(
            &mut session,
            "intersection 0 0\n\
             intersection 3 4\n\
             intersection 3 0\n\
             road 0 0 3 0\n\
             road 3 0 3 4\n\
             navigate 0 0 3 4\n",
        );
        assert_eq!(output, "0\t0\n3\t0\n3\t4\n");
    }

    #[test]
    fn prints_no_path() {
        let mut session = Session::new(OutputFormat::Plain, false);
        let output = run(
            &mut session,
            "intersection 0 0\nintersection 1 1\nnavigate 0 0 1 1\nnavigate 99 99 0 0\n",
        );
        assert_eq!(output, "no path\nno path\n");
    }

    #[test]
    fn prints_same_intersection_twice() {
        let mut session = Session::new(OutputFormat::Plain, false);
        let output = run(&mut session, "intersection 2 5\nnavigate 2 5 2 5\n");
        assert_eq!(output, "2\t5\n2\t5\n");
    }

    #[test]
    fn echoes_additions() {
        let mut session = Session::new(OutputFormat::Plain, true);
        let output = run(
            &mut session,
            "intersection 0 0\nintersection 0 0\nintersection 1 0\nroad 0 0 1 0\nroad 1 0 0 0\nroad 0 0 7 7\n",
        );
        assert_eq!(output, "true\nfalse\ntrue\ntrue\nfalse\nfalse\n");
    }

    #[test]
    fn prints_json_reports() {
        let mut session = Session::new(OutputFormat::Json, false);
        let output = run(
            &mut session,
            "intersection 0 0\nintersection 3 4\nroad 0 0 3 4\nnavigate 0 0 3 4\nnavigate 0 0 9 9\n",
        );
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["path"]["distance"], 5);
        assert_eq!(lines[0]["path"]["intersections"][1]["x"], 3);
        assert!(lines[1]["path"].is_null());
    }

    #[test]
    fn prints_weights_and_adjacency() {
        let mut session = Session::new(OutputFormat::Plain, false);
        let output = run(
            &mut session,
            "intersection 0 0\nintersection 3 4\nintersection 8 8\nroad 0 0 3 4\nweights 0 0\nadjacency\n",
        );
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines[..3],
            [
                "x coordinate is : 0; y coordinate is : 0; weight is : 0",
                "x coordinate is : 3; y coordinate is : 4; weight is : 5",
                "x coordinate is : 8; y coordinate is : 8; weight is : Infinity",
            ]
        );
        assert_eq!(lines[3], "source X : 0 source Y : 0");
        assert_eq!(
            lines[4],
            "\tdestination.X : 3; destination.Y : 4; distance is : 5"
        );
        assert_eq!(session.map().adjacency_report().len(), 5);
    }
}
