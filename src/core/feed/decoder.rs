//! Streaming Atom feed decoder
//!
//! Walks the event stream of a `feed` → `entry` → `content` → domain element
//! document and builds one record per matching domain element. Atom wrapper
//! elements are matched by local name; domain elements must match both the
//! namespace and local name of the requested [`DomainElement`] type.

use crate::domain::element::DomainElement;
use crate::domain::errors::DecodeError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

const FEED: &[u8] = b"feed";
const ENTRY: &[u8] = b"entry";
const CONTENT: &[u8] = b"content";

/// Decode an Atom feed into records of type `T`
///
/// Records come back in document order. An empty feed yields an empty `Vec`.
/// Any well-formedness problem aborts the decode; no partial list is returned.
///
/// # Errors
///
/// - [`DecodeError::Syntax`] - the bytes are not well-formed XML
/// - [`DecodeError::UnexpectedRoot`] - the root element is not `feed`
/// - [`DecodeError::MissingRoot`] - the input contains no element
/// - [`DecodeError::Truncated`] - the input ends with elements still open
/// - [`DecodeError::InvalidField`] - a numeric field holds non-numeric text
///
/// # Example
///
/// ```
/// use hmc_client::core::feed::decode;
/// use hmc_client::domain::LogicalPartition;
///
/// let xml = br#"<feed xmlns="http://www.w3.org/2005/Atom"><entry><content>
///   <LogicalPartition xmlns="http://www.ibm.com/xmlns/systems/power/firmware/uom/mc/2012_10/">
///     <PartitionName>lpar1</PartitionName>
///   </LogicalPartition>
/// </content></entry></feed>"#;
///
/// let lpars = decode::<LogicalPartition>(xml).unwrap();
/// assert_eq!(lpars[0].name, "lpar1");
/// ```
pub fn decode<T: DomainElement>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    let mut reader = NsReader::from_reader(bytes);
    let mut decoder = FeedDecoder::<T>::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(DecodeError::Syntax {
                    position: reader.error_position(),
                    message: e.to_string(),
                })
            }
        };

        match event {
            Event::Start(start) => {
                let frame = decoder.open(&reader, &start)?;
                decoder.stack.push(frame);
            }
            Event::Empty(start) => {
                let frame = decoder.open(&reader, &start)?;
                decoder.close(frame)?;
            }
            Event::End(_) => {
                if let Some(frame) = decoder.stack.pop() {
                    decoder.close(frame)?;
                }
            }
            Event::Text(text) => {
                let unescaped = text.unescape().map_err(|e| DecodeError::Syntax {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                })?;
                if let Some(Frame::Field { text: buf, .. }) = decoder.stack.last_mut() {
                    buf.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                let content = std::str::from_utf8(&data).map_err(|e| DecodeError::Syntax {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                })?;
                if let Some(Frame::Field { text: buf, .. }) = decoder.stack.last_mut() {
                    buf.push_str(content);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    decoder.finish()
}

/// One open element on the decoder stack
enum Frame<T> {
    Feed,
    Entry,
    Content,
    Record(T),
    Field { name: String, text: String },
    Other(String),
}

impl<T: DomainElement> Frame<T> {
    fn name(&self) -> &str {
        match self {
            Frame::Feed => "feed",
            Frame::Entry => "entry",
            Frame::Content => "content",
            Frame::Record(_) => T::LOCAL_NAME,
            Frame::Field { name, .. } | Frame::Other(name) => name.as_str(),
        }
    }
}

struct FeedDecoder<T> {
    stack: Vec<Frame<T>>,
    records: Vec<T>,
    seen_root: bool,
    entries: usize,
}

impl<T: DomainElement> FeedDecoder<T> {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            records: Vec::new(),
            seen_root: false,
            entries: 0,
        }
    }

    /// Classify a start tag by its parent frame
    fn open(
        &mut self,
        reader: &NsReader<&[u8]>,
        start: &BytesStart<'_>,
    ) -> Result<Frame<T>, DecodeError> {
        check_attributes(reader, start)?;

        let (ns, local) = reader.resolve_element(start.name());
        let local = local.as_ref();

        let frame = match self.stack.last() {
            None if !self.seen_root => {
                self.seen_root = true;
                if local != FEED {
                    return Err(DecodeError::UnexpectedRoot {
                        found: qualified_name(start),
                    });
                }
                Frame::Feed
            }
            Some(Frame::Feed) if local == ENTRY => {
                self.entries += 1;
                Frame::Entry
            }
            Some(Frame::Entry) if local == CONTENT => Frame::Content,
            Some(Frame::Content) if is_domain_element::<T>(&ns, local) => {
                Frame::Record(T::default())
            }
            Some(Frame::Record(_)) => Frame::Field {
                name: String::from_utf8_lossy(local).into_owned(),
                text: String::new(),
            },
            _ => Frame::Other(qualified_name(start)),
        };

        Ok(frame)
    }

    /// Apply a finished frame to its parent
    fn close(&mut self, frame: Frame<T>) -> Result<(), DecodeError> {
        match frame {
            Frame::Record(record) => self.records.push(record),
            Frame::Field { name, text } => {
                if let Some(Frame::Record(record)) = self.stack.last_mut() {
                    record.assign(&name, &text)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<T>, DecodeError> {
        if let Some(frame) = self.stack.last() {
            return Err(DecodeError::Truncated {
                open: frame.name().to_string(),
            });
        }
        if !self.seen_root {
            return Err(DecodeError::MissingRoot);
        }

        tracing::debug!(
            element = T::LOCAL_NAME,
            entries = self.entries,
            records = self.records.len(),
            "Decoded feed"
        );

        Ok(self.records)
    }
}

fn is_domain_element<T: DomainElement>(ns: &ResolveResult<'_>, local: &[u8]) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == T::NAMESPACE.as_bytes())
        && local == T::LOCAL_NAME.as_bytes()
}

/// Reject malformed, duplicate or badly escaped attributes
fn check_attributes(reader: &NsReader<&[u8]>, start: &BytesStart<'_>) -> Result<(), DecodeError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DecodeError::Syntax {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;
        attr.unescape_value().map_err(|e| DecodeError::Syntax {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

fn qualified_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}
