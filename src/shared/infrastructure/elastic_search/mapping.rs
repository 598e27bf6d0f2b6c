use serde_json::{json, Value};

fn nested_category() -> Value {
    json!({
        "type": "nested",
        "properties": {
            "category_id": { "type": "keyword" },
            "category_name": { "type": "keyword" },
            "is_active": { "type": "boolean" },
            "deleted_at": { "type": "date" },
            "is_deleted": { "type": "boolean" }
        }
    })
}

fn nested_genre() -> Value {
    json!({
        "type": "nested",
        "properties": {
            "genre_id": { "type": "keyword" },
            "genre_name": { "type": "keyword" },
            "is_active": { "type": "boolean" },
            "deleted_at": { "type": "date" },
            "is_deleted": { "type": "boolean" }
        }
    })
}

fn nested_cast_member() -> Value {
    json!({
        "type": "nested",
        "properties": {
            "cast_member_id": { "type": "keyword" },
            "cast_member_name": { "type": "keyword" },
            "cast_member_type": { "type": "integer" },
            "deleted_at": { "type": "date" },
            "is_deleted": { "type": "boolean" }
        }
    })
}

/// Field mapping shared by every document type stored in the catalog index
pub fn mappings() -> Value {
    json!({
        "properties": {
            "type": { "type": "keyword" },
            "category_name": { "type": "keyword" },
            "category_description": { "type": "text" },
            "genre_name": { "type": "keyword" },
            "cast_member_name": { "type": "keyword" },
            "cast_member_type": { "type": "integer" },
            "video_title": { "type": "text", "analyzer": "ngram_analyzer" },
            "video_title_keyword": { "type": "keyword" },
            "video_description": { "type": "text", "analyzer": "ngram_analyzer" },
            "year_launched": { "type": "integer" },
            "duration": { "type": "integer" },
            "rating": { "type": "keyword" },
            "is_opened": { "type": "boolean" },
            "is_published": { "type": "boolean" },
            "banner_url": { "type": "keyword" },
            "thumbnail_url": { "type": "keyword" },
            "thumbnail_half_url": { "type": "keyword" },
            "trailer_url": { "type": "keyword" },
            "video_url": { "type": "keyword" },
            "categories": nested_category(),
            "genres": nested_genre(),
            "cast_members": nested_cast_member(),
            "is_active": { "type": "boolean" },
            "created_at": { "type": "date" },
            "deleted_at": { "type": "date" }
        }
    })
}

/// Analyzer used for partial matching on video titles and descriptions
pub fn settings() -> Value {
    json!({
        "analysis": {
            "analyzer": {
                "ngram_analyzer": {
                    "type": "custom",
                    "tokenizer": "standard",
                    "filter": ["lowercase", "ngram_filter", "asciifolding"]
                }
            },
            "filter": {
                "ngram_filter": { "type": "ngram", "min_gram": 3, "max_gram": 4 }
            }
        }
    })
}

/// Body for index creation
pub fn index_body() -> Value {
    json!({ "settings": settings(), "mappings": mappings() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relations_are_nested_documents() {
        let mappings = mappings();
        for relation in ["categories", "genres", "cast_members"] {
            assert_eq!(mappings["properties"][relation]["type"], "nested");
        }
        assert_eq!(
            index_body()["settings"]["analysis"]["filter"]["ngram_filter"]["max_gram"],
            4
        );
    }
}
