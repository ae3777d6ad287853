//! Token identifiers, group tags and metadata keys consumed by the engine.

/// Group tag carried by tokens that denote a table
pub const GROUP_TABLE: &str = "table";
/// Group tag carried by tokens that denote a column
pub const GROUP_COLUMN: &str = "column";

pub const SQL_NAME: &str = "sql:name";
pub const SQL_TABLE_NAME: &str = "sql:tablename";
pub const SQL_DATA_TYPE: &str = "sql:datatype";
pub const SQL_IS_PK: &str = "sql:ispk";
pub const SQL_IS_NULLABLE: &str = "sql:isnullable";
pub const SQL_DEFAULT_ORDER: &str = "sql:defaultorder";
pub const SQL_DEFAULT_DATE: &str = "sql:defaultdate";
pub const SQL_DEFAULT_SELECT: &str = "sql:defaultselect";
pub const SQL_EXTRA_TABLES: &str = "sql:extratables";

/// Model-level key written by the SQL model generator
pub const SQL_VERSION: &str = "sql:version";

pub const DATE_ID: &str = "nlpcraft:date";
pub const DATE_FROM: &str = "nlpcraft:date:from";
pub const DATE_TO: &str = "nlpcraft:date:to";

pub const NUM_ID: &str = "nlpcraft:num";
pub const NUM_FROM: &str = "nlpcraft:num:from";
pub const NUM_TO: &str = "nlpcraft:num:to";
pub const NUM_FROM_INCL: &str = "nlpcraft:num:fromincl";
pub const NUM_TO_INCL: &str = "nlpcraft:num:toincl";
pub const NUM_IS_EQUAL: &str = "nlpcraft:num:isequalcondition";
pub const NUM_IS_NOT_EQUAL: &str = "nlpcraft:num:isnotequalcondition";
pub const NUM_IS_RANGE: &str = "nlpcraft:num:israngecondition";
pub const NUM_FROM_NEG_INF: &str = "nlpcraft:num:isfromnegativeinfinity";
pub const NUM_TO_POS_INF: &str = "nlpcraft:num:istopositiveinfinity";

pub const SORT_ID: &str = "nlpcraft:sort";
pub const SORT_ASC: &str = "nlpcraft:sort:asc";

pub const LIMIT_ID: &str = "nlpcraft:limit";
pub const LIMIT_LIMIT: &str = "nlpcraft:limit:limit";
pub const LIMIT_ASC: &str = "nlpcraft:limit:asc";

pub const AGGREGATION_ID: &str = "nlpcraft:aggregation";
pub const AGGREGATION_TYPE: &str = "nlpcraft:aggregation:type";

pub const GROUP_BY_ID: &str = "nlpcraft:group";

/// Key holding the variant positions a reference token points at
pub fn indexes_key(token_id: &str) -> String {
    format!("{}:indexes", token_id)
}

/// Key holding the identifier the referenced token must carry
pub fn note_key(token_id: &str) -> String {
    format!("{}:note", token_id)
}
