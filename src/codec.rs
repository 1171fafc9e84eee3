use crate::models::KeyValue;
use serde_json::de::IoRead;
use serde_json::{Deserializer, StreamDeserializer};
use std::io::{self, Read, Write};

/// Streams `KeyValue` records off a reader, one JSON object at a time.
///
/// Iterator exhaustion means the stream ended cleanly; a malformed record
/// surfaces as an `Err` item and is never folded into end-of-stream.
pub struct RecordReader<R: Read> {
    stream: StreamDeserializer<'static, IoRead<R>, KeyValue>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            stream: Deserializer::from_reader(reader).into_iter(),
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<KeyValue, serde_json::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next()
    }
}

/// Appends `KeyValue` records in the same framing `RecordReader` decodes,
/// so output files remain readable as shard-style input downstream.
pub struct RecordWriter<W: Write> {
    inner: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write(&mut self, record: &KeyValue) -> io::Result<()> {
        serde_json::to_writer(&mut self.inner, record)?;
        self.inner.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
