use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

/// Which part of a puzzle an answer belongs to.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Part {
    A,
    B,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::A => write!(f, "Part A"),
            Part::B => write!(f, "Part B"),
        }
    }
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn answer(&mut self, part: Part, value: &dyn fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: Answer {
                        part,
                        value: DisplayString(value),
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{part}: {value}")?;
            }
        }

        Ok(())
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Report,
                    data: report,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{report}")?;
            }
        }

        Ok(())
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Message,
                    data: Message {
                        kind,
                        output: DisplayString(m),
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{kind}: {m}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
    Message,
    Report,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Serialize)]
#[serde(bound(serialize = "T: fmt::Display"))]
struct Message<T> {
    kind: MessageKind,
    output: DisplayString<T>,
}

#[derive(Serialize)]
struct Answer<'a> {
    part: Part,
    value: DisplayString<&'a dyn fmt::Display>,
}

/// Serializes anything displayable as a string.
struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Output, OutputKind, Part};

    #[test]
    fn test_normal_answers() {
        let mut out = Vec::new();
        let mut o = Output::new(&mut out, OutputKind::Normal);
        o.answer(Part::A, &4361u64).unwrap();
        o.answer(Part::B, &467835u64).unwrap();
        o.info("done").unwrap();
        assert_eq!(out, b"Part A: 4361\nPart B: 467835\ninfo: done\n");
    }

    #[test]
    fn test_json_answers() {
        let mut out = Vec::new();
        let mut o = Output::new(&mut out, OutputKind::Json);
        o.answer(Part::B, &16345u64).unwrap();
        o.error("bad input").unwrap();

        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();

        assert_eq!(
            lines.next(),
            Some(r#"{"type":"answer","data":{"part":"b","value":"16345"}}"#)
        );

        assert_eq!(
            lines.next(),
            Some(r#"{"type":"message","data":{"kind":"error","output":"bad input"}}"#)
        );

        assert_eq!(lines.next(), None);
    }
}
