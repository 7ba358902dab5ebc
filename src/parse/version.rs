//! Version metadata carried by the `<?grc format='1' created='3.7.11'?>`
//! processing instruction in the document prolog.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::LoadError;

/// Target name of the processing instruction holding version metadata.
const VERSION_PI_TARGET: &[u8] = b"grc";

/// Pseudo-attributes of the version processing instruction, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionInfo {
    pub entries: Vec<(String, String)>,
}

impl VersionInfo {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Raw `format` tag; absent on files that predate version tagging.
    pub fn format(&self) -> Option<&str> {
        self.get("format")
    }

    /// Tool version that wrote the file.
    pub fn created(&self) -> Option<&str> {
        self.get("created")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the prolog scan found before the root element.
#[derive(Debug, Clone, Default)]
pub(crate) struct Prolog {
    pub version: VersionInfo,
    pub root: Option<String>,
}

/// Walk the document up to its root element, collecting the version PI.
pub(crate) fn scan_prolog(xml: &str) -> Result<Prolog, LoadError> {
    let mut reader = Reader::from_str(xml);
    let mut prolog = Prolog::default();

    loop {
        match reader.read_event()? {
            Event::PI(pi) if pi.target() == VERSION_PI_TARGET => {
                for attr in pi.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    prolog.version.entries.push((
                        String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                        String::from_utf8_lossy(&attr.value).into_owned(),
                    ));
                }
            }
            Event::Start(e) | Event::Empty(e) => {
                prolog.root = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                return Ok(prolog);
            }
            Event::Eof => return Ok(prolog),
            _ => {}
        }
    }
}
