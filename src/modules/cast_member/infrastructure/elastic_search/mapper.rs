use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::modules::cast_member::domain::{
    CastMember, CastMemberFilter, CastMemberId, CastMemberProps, CastMemberSearchFilter,
    CastMemberType, NestedCastMember,
};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::elastic_search::mapper::{
    ensure_loadable, parse_document_id, DocumentMapper, NestedRelation, NestedSnapshot,
    SearchableDocumentMapper,
};
use crate::shared::infrastructure::elastic_search::query::{contains, ids, term, BoolQuery};

pub const CAST_MEMBER_DOCUMENT_TYPE: &str = "CastMember";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMemberDocument {
    pub cast_member_name: String,
    pub cast_member_type: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub document_type: String,
}

/// Entry of the `cast_members` array in video documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedCastMemberDocument {
    pub cast_member_id: String,
    pub cast_member_name: String,
    pub cast_member_type: i32,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl From<&NestedCastMember> for NestedCastMemberDocument {
    fn from(nested: &NestedCastMember) -> Self {
        Self {
            cast_member_id: nested.cast_member_id().to_string(),
            cast_member_name: nested.name().to_string(),
            cast_member_type: nested.cast_member_type().as_i32(),
            deleted_at: nested.deleted_at(),
            is_deleted: nested.is_deleted(),
        }
    }
}

impl NestedCastMemberDocument {
    pub fn into_nested(self, errors: &mut Notification) -> NestedCastMember {
        let cast_member_id: CastMemberId =
            parse_document_id("cast_members", &self.cast_member_id, errors);
        NestedCastMember::create(
            cast_member_id,
            self.cast_member_name,
            load_type("cast_members", self.cast_member_type, errors),
            self.deleted_at,
        )
    }
}

/// Unknown codes are recorded under `field`; the placeholder never outlives a failed load
fn load_type(field: &str, code: i32, errors: &mut Notification) -> CastMemberType {
    CastMemberType::try_from(code).unwrap_or_else(|error| {
        errors.add_error(field, error.to_string());
        CastMemberType::Director
    })
}

pub struct CastMemberDocumentMapper;

impl DocumentMapper for CastMemberDocumentMapper {
    type Entity = CastMember;
    type Document = CastMemberDocument;

    const DOCUMENT_TYPE: &'static str = CAST_MEMBER_DOCUMENT_TYPE;

    fn to_document(cast_member: &CastMember) -> CastMemberDocument {
        CastMemberDocument {
            cast_member_name: cast_member.name().to_string(),
            cast_member_type: cast_member.cast_member_type().as_i32(),
            created_at: cast_member.created_at(),
            deleted_at: cast_member.deleted_at(),
            document_type: CAST_MEMBER_DOCUMENT_TYPE.to_string(),
        }
    }

    fn to_entity(id: &str, document: CastMemberDocument) -> AppResult<CastMember> {
        let mut errors = Notification::new();
        let mut cast_member = CastMember::new(CastMemberProps {
            cast_member_id: parse_document_id("cast_member_id", id, &mut errors),
            name: document.cast_member_name,
            cast_member_type: load_type("type", document.cast_member_type, &mut errors),
            created_at: document.created_at,
            deleted_at: document.deleted_at,
        });
        cast_member.validate(&[]);
        ensure_loadable(cast_member, errors)
    }

    fn filter_clauses(filter: &CastMemberFilter) -> Vec<Value> {
        let mut clauses = Vec::new();
        if let Some(cast_member_id) = &filter.cast_member_id {
            clauses.push(ids(&[cast_member_id.to_string()]));
        }
        if let Some(name) = &filter.name {
            clauses.push(term("cast_member_name", name.as_str()));
        }
        if let Some(cast_member_type) = filter.cast_member_type {
            clauses.push(term("cast_member_type", cast_member_type.as_i32()));
        }
        clauses
    }

    fn sort_field(field: &str) -> Option<&'static str> {
        match field {
            "name" => Some("cast_member_name"),
            "created_at" => Some("created_at"),
            _ => None,
        }
    }

    fn nested_snapshot(cast_member: &CastMember) -> Option<NestedSnapshot> {
        let mut fields = Map::new();
        fields.insert("cast_member_name".to_string(), json!(cast_member.name()));
        fields.insert(
            "cast_member_type".to_string(),
            json!(cast_member.cast_member_type().as_i32()),
        );
        fields.insert("deleted_at".to_string(), json!(cast_member.deleted_at()));
        fields.insert("is_deleted".to_string(), json!(cast_member.is_deleted()));

        Some(NestedSnapshot {
            relation: NestedRelation::CAST_MEMBERS,
            id: cast_member.cast_member_id().to_string(),
            fields,
        })
    }
}

impl SearchableDocumentMapper for CastMemberDocumentMapper {
    fn search_query(filter: &CastMemberSearchFilter, mut query: BoolQuery) -> BoolQuery {
        if let Some(name) = &filter.name {
            query = query.must(contains("cast_member_name", name));
        }
        if let Some(cast_member_type) = filter.cast_member_type {
            query = query.must(term("cast_member_type", cast_member_type.as_i32()));
        }
        query
    }
}
