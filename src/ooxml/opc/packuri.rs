/// Part names inside an OPC package.
use std::fmt;

/// Pseudo-partname of the package itself.
pub const PACKAGE_URI: &str = "/";

/// Partname of the content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// An absolute partname such as `/ppt/slides/slide1.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a partname. It must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(PackURI { uri })
    }

    /// Resolve a relationship target (for example `../media/image1.png`)
    /// against the directory of its source part.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        let joined = if relative_ref.starts_with('/') {
            relative_ref.to_string()
        } else if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in joined.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                other => segments.push(other),
            }
        }

        Self::new(format!("/{}", segments.join("/")))
    }

    /// Directory portion, `/ppt/slides` for `/ppt/slides/slide1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Final path segment.
    pub fn filename(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or("")
    }

    /// Extension without the leading period.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        filename.rfind('.').map_or("", |pos| &filename[pos + 1..])
    }

    /// ZIP member name, the partname without its leading slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Partname of the `.rels` part holding this part's relationships.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base = self.base_uri();
        if base == "/" {
            Self::new(format!("/_rels/{}.rels", self.filename()))
        } else {
            Self::new(format!("{}/_rels/{}.rels", base, self.filename()))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}
