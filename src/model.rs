//! The documentation tree: typed view over the ingested metadata document.
//!
//! The document is produced externally (a TypeDoc-style extraction run) and is
//! strictly read-only here. It is loaded once and passed by reference into the
//! lookup and generation layers.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Structured documentation prose attached to a node.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Ordered text segments making up the summary.
    #[serde(default)]
    pub summary: Vec<CommentSegment>,
}

/// One segment of comment prose, as emitted by the extraction tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentSegment {
    /// Segment discriminator (`text`, `code`, ...). Carried, not interpreted.
    #[serde(default)]
    pub kind: String,
    /// The raw segment text.
    pub text: String,
}

/// One entry in the documentation tree: project, class, method, parameter...
///
/// Field access is optimistic: absent collections mean "no data", never an
/// error. The one place absence is significant is `children` — a root without
/// a children collection aborts generation, while an empty one renders empty
/// listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocNode {
    /// Ordered child nodes, exclusively owned (tree, no sharing, no cycles).
    /// `None` when the document carries no children collection at all.
    #[serde(default)]
    pub children: Option<Vec<DocNode>>,
    /// Documentation prose attached to this node.
    #[serde(default)]
    pub comment: Option<Comment>,
    /// Literal default value, used for enum members and defaulted parameters.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Boolean modifiers. Absent flags read as false.
    #[serde(default)]
    pub flags: Flags,
    /// Unique within the document, stable across one generation run.
    pub id: u64,
    /// Reflection kind discriminant.
    pub kind: Kind,
    /// Identifier, unique among siblings (assumed, not enforced).
    pub name: String,
    /// Parameters owned by a signature node.
    #[serde(default)]
    pub parameters: Vec<DocNode>,
    /// Callable overloads for functions, methods, and constructors.
    #[serde(default)]
    pub signatures: Vec<DocNode>,
    /// Provenance records, used only to build outbound source links.
    #[serde(default)]
    pub sources: Vec<SourceLocation>,
    /// Free-form type descriptor. Opaque: shape varies by kind and is read
    /// optimistically by the render layer, never validated.
    #[serde(default, rename = "type")]
    pub type_info: Option<serde_json::Value>,
}

impl DocNode {
    /// The child nodes, or an empty slice when the collection is absent.
    pub fn children(&self) -> &[DocNode] {
        return self.children.as_deref().unwrap_or(&[]);
    }

    /// The literal value of an enum member or defaulted node: the `value`
    /// field of the type descriptor when present, else the default value.
    pub fn literal_value(&self) -> Option<String> {
        if let Some(value) = self.type_info.as_ref().and_then(|t| return t.get("value")) {
            return Some(match value.as_str() {
                None => value.to_string(),
                Some(s) => s.to_string(),
            });
        }
        return self.default_value.clone();
    }

    /// Concatenated summary prose, or `None` when there is no comment.
    pub fn summary_text(&self) -> Option<String> {
        let comment = self.comment.as_ref()?;
        if comment.summary.is_empty() {
            return None;
        }
        let text: String = comment.summary.iter().map(|s| return s.text.as_str()).collect();
        return Some(text);
    }
}

/// Optional boolean modifiers on a node.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    /// Declared outside the documented project.
    #[serde(default)]
    pub is_external: bool,
    /// Optional member or parameter.
    #[serde(default)]
    pub is_optional: bool,
    /// Private visibility.
    #[serde(default)]
    pub is_private: bool,
    /// Protected visibility.
    #[serde(default)]
    pub is_protected: bool,
    /// Static member.
    #[serde(default)]
    pub is_static: bool,
}

/// Reflection kind of a documentation node.
///
/// The wire format uses bit-flag-shaped integer codes, but this codebase only
/// ever treats them as discriminants — codes are never combined. The set is
/// closed: an unknown code is a deserialization error, not an open variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Getter/setter pair (262144).
    Accessor,
    /// Call signature of a callable (4096).
    CallSignature,
    /// Class declaration (128).
    Class,
    /// Class constructor (512).
    Constructor,
    /// Constructor signature (16384).
    ConstructorSignature,
    /// Enum declaration (8).
    Enum,
    /// Enum member (16).
    EnumMember,
    /// Event member (8388608).
    Event,
    /// Free function (64).
    Function,
    /// Getter signature (524288).
    GetSignature,
    /// Index signature (8192).
    IndexSignature,
    /// Interface declaration (256).
    Interface,
    /// Method member (2048).
    Method,
    /// Module (2).
    Module,
    /// Namespace (4).
    Namespace,
    /// Object literal (2097152).
    ObjectLiteral,
    /// Parameter of a signature (32768).
    Parameter,
    /// The document root (1). Exactly one per document.
    Project,
    /// Property member (1024).
    Property,
    /// Setter signature (1048576).
    SetSignature,
    /// Type alias declaration (4194304).
    TypeAlias,
    /// Inline type literal (65536).
    TypeLiteral,
    /// Type parameter (131072).
    TypeParameter,
    /// Variable declaration (32).
    Variable,
}

impl Kind {
    /// The integer code used on the wire.
    pub const fn code(self) -> u64 {
        return match self {
            Kind::Accessor => 262_144,
            Kind::CallSignature => 4096,
            Kind::Class => 128,
            Kind::Constructor => 512,
            Kind::ConstructorSignature => 16_384,
            Kind::Enum => 8,
            Kind::EnumMember => 16,
            Kind::Event => 8_388_608,
            Kind::Function => 64,
            Kind::GetSignature => 524_288,
            Kind::IndexSignature => 8192,
            Kind::Interface => 256,
            Kind::Method => 2048,
            Kind::Module => 2,
            Kind::Namespace => 4,
            Kind::ObjectLiteral => 2_097_152,
            Kind::Parameter => 32_768,
            Kind::Project => 1,
            Kind::Property => 1024,
            Kind::SetSignature => 1_048_576,
            Kind::TypeAlias => 4_194_304,
            Kind::TypeLiteral => 65_536,
            Kind::TypeParameter => 131_072,
            Kind::Variable => 32,
        };
    }

    /// Map a wire code back to its kind. `None` for codes outside the set.
    pub const fn from_code(code: u64) -> Option<Kind> {
        return match code {
            1 => Some(Kind::Project),
            2 => Some(Kind::Module),
            4 => Some(Kind::Namespace),
            8 => Some(Kind::Enum),
            16 => Some(Kind::EnumMember),
            32 => Some(Kind::Variable),
            64 => Some(Kind::Function),
            128 => Some(Kind::Class),
            256 => Some(Kind::Interface),
            512 => Some(Kind::Constructor),
            1024 => Some(Kind::Property),
            2048 => Some(Kind::Method),
            4096 => Some(Kind::CallSignature),
            8192 => Some(Kind::IndexSignature),
            16_384 => Some(Kind::ConstructorSignature),
            32_768 => Some(Kind::Parameter),
            65_536 => Some(Kind::TypeLiteral),
            131_072 => Some(Kind::TypeParameter),
            262_144 => Some(Kind::Accessor),
            524_288 => Some(Kind::GetSignature),
            1_048_576 => Some(Kind::SetSignature),
            2_097_152 => Some(Kind::ObjectLiteral),
            4_194_304 => Some(Kind::TypeAlias),
            8_388_608 => Some(Kind::Event),
            _ => None,
        };
    }

    /// The human label shown in search results and page headings.
    /// Type aliases are labeled `Type` to match their routing category.
    pub const fn label(self) -> &'static str {
        return match self {
            Kind::Accessor => "Accessor",
            Kind::CallSignature => "Call Signature",
            Kind::Class => "Class",
            Kind::Constructor => "Constructor",
            Kind::ConstructorSignature => "Constructor Signature",
            Kind::Enum => "Enum",
            Kind::EnumMember => "Enum Member",
            Kind::Event => "Event",
            Kind::Function => "Function",
            Kind::GetSignature => "Get Signature",
            Kind::IndexSignature => "Index Signature",
            Kind::Interface => "Interface",
            Kind::Method => "Method",
            Kind::Module => "Module",
            Kind::Namespace => "Namespace",
            Kind::ObjectLiteral => "Object Literal",
            Kind::Parameter => "Parameter",
            Kind::Project => "Project",
            Kind::Property => "Property",
            Kind::SetSignature => "Set Signature",
            Kind::TypeAlias => "Type",
            Kind::TypeLiteral => "Type Literal",
            Kind::TypeParameter => "Type Parameter",
            Kind::Variable => "Variable",
        };
    }
}

impl<'de> Deserialize<'de> for Kind {
    /// Decode the integer wire code, rejecting codes outside the closed set.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u64::deserialize(deserializer)?;
        return Kind::from_code(code).ok_or_else(|| {
            return serde::de::Error::custom(format!("unknown reflection kind code: {code}"));
        });
    }
}

impl Serialize for Kind {
    /// Encode as the integer wire code, mirroring the input document.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        return serializer.serialize_u64(self.code());
    }
}

/// Provenance of a declaration in the documented source tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// Zero-based column.
    #[serde(default)]
    pub character: u32,
    /// Path of the originating file, relative to the documented repository.
    pub file_name: String,
    /// One-based line number.
    pub line: u32,
}

/// Load and parse the metadata document from disk.
///
/// # Errors
///
/// Returns `Error::DocumentNotFound` if the file doesn't exist,
/// `Error::Io` for other read failures,
/// or `Error::DocumentInvalid` if the JSON doesn't deserialize.
pub fn load(path: &Path) -> Result<DocNode, Error> {
    let content = match std::fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::DocumentNotFound { path: path.to_path_buf() });
        },
        Err(e) => return Err(Error::Io(e)),
        Ok(c) => c,
    };
    let root: DocNode = serde_json::from_str(&content).map_err(|source| {
        return Error::DocumentInvalid { path: path.to_path_buf(), source };
    })?;
    return Ok(root);
}
