/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the fundamental units of content in an OPC package, each with a
/// unique partname, a content type, and optional relationships to other parts.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// Trait representing a part in an OPC package.
pub trait Part {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the binary content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part, returning its rId.
    ///
    /// The target is stored relative to this part's directory.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels_mut().relate_to(target, reltype)
    }
}

/// A part holding its serialized content as bytes.
#[derive(Debug)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    /// Create a new part.
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: impl Into<Vec<u8>>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.into(),
            blob: blob.into(),
            rels,
        }
    }

    /// Replace the part content.
    ///
    /// Used when the content references rIds that only exist once the part's
    /// relationships have been added.
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }

    /// Create a part from XML text.
    pub fn from_xml(partname: PackURI, content_type: impl Into<String>, xml: impl Into<String>) -> Self {
        Self::new(partname, content_type, xml.into().into_bytes())
    }
}

impl Part for BlobPart {
    #[inline]
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relate_to_is_relative_to_part_directory() {
        let mut slide = BlobPart::from_xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            "application/xml",
            "<p:sld/>",
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();

        let r_id = slide.relate_to(&layout, "layout");
        assert_eq!(r_id, "rId1");
        assert_eq!(slide.relate_to(&layout, "layout"), "rId1");
        assert_eq!(
            slide.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
        assert_eq!(slide.blob(), b"<p:sld/>");
    }
}
