/// The in-memory OPC package.
///
/// An `OpcPackage` owns the package-level relationships and every part in
/// insertion order, which is also the order parts are written to the archive.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;

pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Box<dyn Part>>,

    /// Index of each part by partname
    index: HashMap<String, usize>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// Fails with [`OpcError::DuplicatePart`] if a part with the same
    /// partname was already added.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        let name = part.partname().to_string();
        if self.index.contains_key(&name) {
            return Err(OpcError::DuplicatePart(name));
        }
        self.index.insert(name, self.parts.len());
        self.parts.push(part);
        Ok(())
    }

    /// Get a part by partname.
    pub fn part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.index
            .get(partname.as_str())
            .map(|&i| self.parts[i].as_ref())
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get mutable access to a part by partname.
    pub fn part_mut(&mut self, partname: &PackURI) -> Result<&mut (dyn Part + 'static)> {
        match self.index.get(partname.as_str()) {
            Some(&i) => Ok(self.parts[i].as_mut()),
            None => Err(OpcError::PartNotFound(partname.to_string())),
        }
    }

    /// Relate a source part to a target part, returning the rId.
    ///
    /// Both parts must already be in the package.
    pub fn relate_parts(&mut self, source: &PackURI, target: &PackURI, reltype: &str) -> Result<String> {
        if !self.index.contains_key(target.as_str()) {
            return Err(OpcError::InvalidRelationship(format!(
                "{} -> {}: target is not in the package",
                source, target
            )));
        }
        Ok(self.part_mut(source)?.relate_to(target, reltype))
    }

    /// Relate the package itself to a part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> Result<String> {
        if !self.index.contains_key(target.as_str()) {
            return Err(OpcError::PartNotFound(target.to_string()));
        }
        Ok(self.rels.relate_to(target, reltype))
    }

    /// Get the package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|p| p.as_ref())
    }

    /// Number of parts in the package.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
