//! Static field tables describing each record.
//!
//! The tables carry what the request binding needs to route a field
//! (path, query, header, body, or not transmitted) and what the wire contract
//! says about mandatoriness. Wire names always match the serde names of the
//! corresponding struct fields.

/// Where a field travels when its record is bound to an HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Path,
    Query,
    Header,
    Body,
    /// Consumed by the client only (e.g. retry settings); never transmitted.
    Metadata,
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Integer,
    Boolean,
    String,
    Timestamp,
    Enum(&'static str),
    Record(&'static str),
    StringList,
    RecordList(&'static str),
}

/// One field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Attribute name, as used in diagnostics.
    pub name: &'static str,
    pub wire_name: &'static str,
    pub mandatory: bool,
    pub field_type: FieldType,
    pub position: Position,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        wire_name: &'static str,
        mandatory: bool,
        field_type: FieldType,
        position: Position,
    ) -> Self {
        Self {
            name,
            wire_name,
            mandatory,
            field_type,
            position,
        }
    }

    /// Field of a data record (always carried in the JSON body).
    pub const fn body(
        name: &'static str,
        wire_name: &'static str,
        mandatory: bool,
        field_type: FieldType,
    ) -> Self {
        Self::new(name, wire_name, mandatory, field_type, Position::Body)
    }

    pub const fn path(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, wire_name, true, FieldType::String, Position::Path)
    }

    pub const fn query(
        name: &'static str,
        wire_name: &'static str,
        mandatory: bool,
        field_type: FieldType,
    ) -> Self {
        Self::new(name, wire_name, mandatory, field_type, Position::Query)
    }

    pub const fn header(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, wire_name, false, FieldType::String, Position::Header)
    }

    pub const fn metadata(name: &'static str) -> Self {
        Self::new(name, "", false, FieldType::Record("RequestMetadata"), Position::Metadata)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.field_type, FieldType::Enum(_))
    }
}

/// A record with a statically declared schema.
pub trait Record {
    const NAME: &'static str;

    fn fields() -> &'static [FieldSpec];

    fn field(wire_name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.wire_name == wire_name)
    }

    /// Enum-typed fields, in schema order.
    fn enum_fields() -> Vec<&'static FieldSpec> {
        Self::fields().iter().filter(|f| f.is_enum()).collect()
    }
}

// Common request header fields.
pub(crate) const OPC_REQUEST_ID: FieldSpec = FieldSpec::header("OpcRequestId", "opc-request-id");
pub(crate) const OPC_RETRY_TOKEN: FieldSpec =
    FieldSpec::header("OpcRetryToken", "opc-retry-token");
pub(crate) const IF_MATCH: FieldSpec = FieldSpec::header("IfMatch", "if-match");
pub(crate) const INTERNAL_AUTHZ_OPERATION_NAME: FieldSpec =
    FieldSpec::header("InternalAuthzOperationName", "internal-authz-operation-name");
pub(crate) const INTERNAL_AUTHZ_RESOURCE_KIND: FieldSpec =
    FieldSpec::header("InternalAuthzResourceKind", "internal-authz-resource-kind");
pub(crate) const REQUEST_METADATA: FieldSpec = FieldSpec::metadata("RequestMetadata");
