//! Schema trees.
//!
//! A [`Schema`] is an arena of [`SchemaNode`]s. Node 0 is the entity root
//! section; every other node is reached from it through ordered child lists.
//! Paths address nodes below the root and may use `/` or `.` as separator,
//! e.g. `Regulatory/MCOB/ESISVersion`.

use serde::Serialize;

use crate::entity::EntityKind;
use crate::error::{ModelError, Result};
use crate::field::FieldDefinition;

/// Index of a node in a schema arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SchemaNode {
    Section { name: String, children: Vec<NodeId> },
    Field(FieldDefinition),
}

impl SchemaNode {
    pub fn name(&self) -> &str {
        match self {
            SchemaNode::Section { name, .. } => name,
            SchemaNode::Field(field) => &field.name,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDefinition> {
        match self {
            SchemaNode::Field(field) => Some(field),
            SchemaNode::Section { .. } => None,
        }
    }
}

/// A field together with the sections leading to it.
#[derive(Debug, Clone, Copy)]
pub struct SchemaField<'a> {
    sections: &'a [String],
    pub definition: &'a FieldDefinition,
}

impl<'a> SchemaField<'a> {
    /// Section names from the top-level section down (root key excluded).
    pub fn sections(&self) -> &'a [String] {
        self.sections
    }

    /// Top-level section the field belongs to.
    pub fn top_section(&self) -> &'a str {
        self.sections.first().map(String::as_str).unwrap_or_default()
    }

    /// Slash-separated path below the root, e.g. `Revaluation/Revaluation1/RevaluationSource`.
    pub fn path(&self) -> String {
        let mut parts: Vec<&str> = self.sections.iter().map(String::as_str).collect();
        parts.push(&self.definition.name);
        parts.join("/")
    }
}

/// Arena-backed schema tree for one entity kind.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    entity: EntityKind,
    nodes: Vec<SchemaNode>,
    /// Section path of every field node, parallel to `nodes`.
    #[serde(skip)]
    field_sections: Vec<Vec<String>>,
}

impl Schema {
    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &SchemaNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id.0] {
            SchemaNode::Section { children, .. } => children,
            SchemaNode::Field(_) => &[],
        }
    }

    /// Top-level section names in declaration order.
    pub fn sections(&self) -> Vec<&str> {
        self.children(self.root())
            .iter()
            .map(|id| self.node(*id))
            .filter(|node| matches!(node, SchemaNode::Section { .. }))
            .map(SchemaNode::name)
            .collect()
    }

    /// Resolve a path below the root to a node.
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root();
        for segment in split_schema_path(path) {
            current = *self
                .children(current)
                .iter()
                .find(|id| self.node(**id).name() == segment)?;
        }
        Some(current)
    }

    /// Field definition at `path`, if the path names a field.
    pub fn field(&self, path: &str) -> Option<&FieldDefinition> {
        self.lookup(path).and_then(|id| self.node(id).as_field())
    }

    /// Like [`Schema::field`] but reports a missing path as an error.
    pub fn require_field(&self, path: &str) -> Result<&FieldDefinition> {
        self.field(path)
            .ok_or_else(|| ModelError::PathNotFound(path.to_string()))
    }

    /// All fields, depth-first in declaration order.
    pub fn fields(&self) -> Vec<SchemaField<'_>> {
        let mut out = Vec::new();
        self.collect_fields(self.root(), &mut out);
        out
    }

    /// Fields declared somewhere below the given top-level section.
    pub fn section_fields(&self, section: &str) -> Vec<SchemaField<'_>> {
        self.fields()
            .into_iter()
            .filter(|field| field.top_section() == section)
            .collect()
    }

    pub fn menu_fields(&self) -> Vec<SchemaField<'_>> {
        self.fields()
            .into_iter()
            .filter(|field| field.definition.is_menu())
            .collect()
    }

    pub fn required_fields(&self) -> Vec<SchemaField<'_>> {
        self.fields()
            .into_iter()
            .filter(|field| field.definition.required)
            .collect()
    }

    pub fn field_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, SchemaNode::Field(_)))
            .count()
    }

    fn collect_fields<'a>(&'a self, id: NodeId, out: &mut Vec<SchemaField<'a>>) {
        for child in self.children(id) {
            match self.node(*child) {
                SchemaNode::Field(definition) => out.push(SchemaField {
                    sections: &self.field_sections[child.0],
                    definition,
                }),
                SchemaNode::Section { .. } => self.collect_fields(*child, out),
            }
        }
    }
}

/// Incremental schema construction.
#[derive(Debug)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            schema: Schema {
                entity,
                nodes: vec![SchemaNode::Section {
                    name: entity.root_key().to_string(),
                    children: Vec::new(),
                }],
                field_sections: vec![Vec::new()],
            },
        }
    }

    /// Ensure the section path exists, creating missing sections.
    pub fn section(&mut self, path: &[&str]) -> Result<NodeId> {
        let mut current = self.schema.root();
        for (depth, segment) in path.iter().enumerate() {
            let existing = self
                .schema
                .children(current)
                .iter()
                .copied()
                .find(|id| self.schema.node(*id).name() == *segment);
            current = match existing {
                Some(id) => match self.schema.node(id) {
                    SchemaNode::Section { .. } => id,
                    SchemaNode::Field(_) => {
                        return Err(ModelError::Conflict(path[..=depth].join("/")));
                    }
                },
                None => self.push(
                    current,
                    SchemaNode::Section {
                        name: (*segment).to_string(),
                        children: Vec::new(),
                    },
                    Vec::new(),
                ),
            };
        }
        Ok(current)
    }

    /// Add a field under the given section path.
    pub fn field(&mut self, section: &[&str], definition: FieldDefinition) -> Result<NodeId> {
        let parent = self.section(section)?;
        if self
            .schema
            .children(parent)
            .iter()
            .any(|id| self.schema.node(*id).name() == definition.name)
        {
            let mut path: Vec<&str> = section.to_vec();
            path.push(&definition.name);
            return Err(ModelError::Conflict(path.join("/")));
        }
        let sections = section.iter().map(|s| (*s).to_string()).collect();
        Ok(self.push(parent, SchemaNode::Field(definition), sections))
    }

    pub fn build(self) -> Schema {
        self.schema
    }

    fn push(&mut self, parent: NodeId, node: SchemaNode, sections: Vec<String>) -> NodeId {
        let id = NodeId(self.schema.nodes.len());
        self.schema.nodes.push(node);
        self.schema.field_sections.push(sections);
        if let SchemaNode::Section { children, .. } = &mut self.schema.nodes[parent.0] {
            children.push(id);
        }
        id
    }
}

fn split_schema_path(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '.']).filter(|segment| !segment.is_empty())
}
