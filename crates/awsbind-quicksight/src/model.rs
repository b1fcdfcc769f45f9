//! QuickSight data shapes shared by requests and responses.
//!
//! Members use the service's PascalCase wire names. Union shapes (exactly one
//! member set) are externally tagged enums.

use awsbind_core::serde_util::option_epoch_seconds;
use awsbind_core::string_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Enumerations ────────────────────────────────────────────────────────

string_enum! {
    pub enum ResourceStatus {
        CreationInProgress => "CREATION_IN_PROGRESS",
        CreationSuccessful => "CREATION_SUCCESSFUL",
        CreationFailed => "CREATION_FAILED",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        UpdateSuccessful => "UPDATE_SUCCESSFUL",
        UpdateFailed => "UPDATE_FAILED",
    }
}

string_enum! {
    pub enum DataSetImportMode {
        Spice => "SPICE",
        DirectQuery => "DIRECT_QUERY",
    }
}

string_enum! {
    pub enum DataSourceType {
        AdobeAnalytics => "ADOBE_ANALYTICS",
        AmazonElasticsearch => "AMAZON_ELASTICSEARCH",
        Athena => "ATHENA",
        Aurora => "AURORA",
        AuroraPostgresql => "AURORA_POSTGRESQL",
        AwsIotAnalytics => "AWS_IOT_ANALYTICS",
        Github => "GITHUB",
        Jira => "JIRA",
        Mariadb => "MARIADB",
        Mysql => "MYSQL",
        Postgresql => "POSTGRESQL",
        Presto => "PRESTO",
        Rds => "RDS",
        Redshift => "REDSHIFT",
        S3 => "S3",
        Salesforce => "SALESFORCE",
        Servicenow => "SERVICENOW",
        Snowflake => "SNOWFLAKE",
        Spark => "SPARK",
        Sqlserver => "SQLSERVER",
        Teradata => "TERADATA",
        Twitter => "TWITTER",
    }
}

string_enum! {
    pub enum IdentityType {
        Iam => "IAM",
        Quicksight => "QUICKSIGHT",
    }
}

string_enum! {
    pub enum UserRole {
        Admin => "ADMIN",
        Author => "AUTHOR",
        Reader => "READER",
        RestrictedAuthor => "RESTRICTED_AUTHOR",
        RestrictedReader => "RESTRICTED_READER",
    }
}

string_enum! {
    pub enum AssignmentStatus {
        Enabled => "ENABLED",
        Draft => "DRAFT",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum IngestionStatus {
        Initialized => "INITIALIZED",
        Queued => "QUEUED",
        Running => "RUNNING",
        Failed => "FAILED",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

string_enum! {
    pub enum IngestionRequestSource {
        Manual => "MANUAL",
        Scheduled => "SCHEDULED",
    }
}

string_enum! {
    pub enum IngestionRequestType {
        InitialIngestion => "INITIAL_INGESTION",
        Edit => "EDIT",
        IncrementalRefresh => "INCREMENTAL_REFRESH",
        FullRefresh => "FULL_REFRESH",
    }
}

string_enum! {
    pub enum InputColumnDataType {
        String => "STRING",
        Integer => "INTEGER",
        Decimal => "DECIMAL",
        Datetime => "DATETIME",
        Bit => "BIT",
        Boolean => "BOOLEAN",
        Json => "JSON",
    }
}

string_enum! {
    pub enum ColumnDataType {
        String => "STRING",
        Integer => "INTEGER",
        Decimal => "DECIMAL",
        Datetime => "DATETIME",
    }
}

string_enum! {
    pub enum JoinType {
        Inner => "INNER",
        Outer => "OUTER",
        Left => "LEFT",
        Right => "RIGHT",
    }
}

string_enum! {
    pub enum FileFormat {
        Csv => "CSV",
        Tsv => "TSV",
        Clf => "CLF",
        Elf => "ELF",
        Xlsx => "XLSX",
        Json => "JSON",
    }
}

string_enum! {
    pub enum TextQualifier {
        DoubleQuote => "DOUBLE_QUOTE",
        SingleQuote => "SINGLE_QUOTE",
    }
}

string_enum! {
    pub enum DashboardBehavior {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum DashboardUiState {
        Expanded => "EXPANDED",
        Collapsed => "COLLAPSED",
    }
}

string_enum! {
    pub enum FilterOperator {
        StringEquals => "StringEquals",
    }
}

string_enum! {
    pub enum DashboardFilterAttribute {
        QuicksightUser => "QUICKSIGHT_USER",
    }
}

string_enum! {
    pub enum EmbeddingIdentityType {
        Iam => "IAM",
        Quicksight => "QUICKSIGHT",
    }
}

string_enum! {
    pub enum RowLevelPermissionPolicy {
        GrantAccess => "GRANT_ACCESS",
        DenyAccess => "DENY_ACCESS",
    }
}

string_enum! {
    pub enum GeoSpatialDataRole {
        Country => "COUNTRY",
        State => "STATE",
        County => "COUNTY",
        City => "CITY",
        Postcode => "POSTCODE",
        Longitude => "LONGITUDE",
        Latitude => "LATITUDE",
    }
}

string_enum! {
    pub enum DataSourceErrorType {
        Timeout => "TIMEOUT",
        EngineVersionNotSupported => "ENGINE_VERSION_NOT_SUPPORTED",
        UnknownHost => "UNKNOWN_HOST",
        GenericSqlFailure => "GENERIC_SQL_FAILURE",
        Conflict => "CONFLICT",
        Unknown => "UNKNOWN",
    }
}

// ── Common ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A principal and the actions it may perform on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourcePermission {
    /// User, group or account ARN.
    pub principal: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSetReference {
    pub data_set_placeholder: String,
    pub data_set_arn: String,
}

// ── Dashboards ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardError {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardVersion {
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DashboardError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_entity_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dashboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<DashboardVersion>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_published_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_version_number: Option<i64>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_published_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardVersionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_entity_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSourceTemplate {
    pub data_set_references: Vec<DataSetReference>,
    pub arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSourceEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_template: Option<DashboardSourceTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StringParameter {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntegerParameter {
    pub name: String,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecimalParameter {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateTimeParameter {
    pub name: String,
    /// Epoch seconds.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameters {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub string_parameters: Vec<StringParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub integer_parameters: Vec<IntegerParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decimal_parameters: Vec<DecimalParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_time_parameters: Vec<DateTimeParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdHocFilteringOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<DashboardBehavior>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportToCsvOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<DashboardBehavior>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SheetControlsOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_state: Option<DashboardUiState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardPublishOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_hoc_filtering_option: Option<AdHocFilteringOption>,
    #[serde(rename = "ExportToCSVOption", skip_serializing_if = "Option::is_none")]
    pub export_to_csv_option: Option<ExportToCsvOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_controls_option: Option<SheetControlsOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSearchFilter {
    pub operator: FilterOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<DashboardFilterAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DashboardSearchFilter {
    /// Dashboards the given QuickSight user can access.
    pub fn user(user_arn: impl Into<String>) -> Self {
        Self {
            operator: FilterOperator::StringEquals,
            name: Some(DashboardFilterAttribute::QuicksightUser),
            value: Some(user_arn.into()),
        }
    }
}

// ── Data sets ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputColumn {
    pub name: String,
    #[serde(rename = "Type")]
    pub column_type: InputColumnDataType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelationalTable {
    pub data_source_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    pub input_columns: Vec<InputColumn>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomSql {
    pub data_source_arn: String,
    pub name: String,
    pub sql_query: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<InputColumn>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FileFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_from_row: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_qualifier: Option<TextQualifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Source {
    pub data_source_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_settings: Option<UploadSettings>,
    pub input_columns: Vec<InputColumn>,
}

/// Where a data set's rows physically come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PhysicalTable {
    RelationalTable(RelationalTable),
    CustomSql(CustomSql),
    S3Source(S3Source),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculatedColumn {
    pub column_name: String,
    pub column_id: String,
    pub expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_geographic_role: Option<GeoSpatialDataRole>,
}

/// One step of a logical table's transform pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformOperation {
    #[serde(rename_all = "PascalCase")]
    ProjectOperation { projected_columns: Vec<String> },
    #[serde(rename_all = "PascalCase")]
    FilterOperation { condition_expression: String },
    #[serde(rename_all = "PascalCase")]
    CreateColumnsOperation { columns: Vec<CalculatedColumn> },
    #[serde(rename_all = "PascalCase")]
    RenameColumnOperation {
        column_name: String,
        new_column_name: String,
    },
    #[serde(rename_all = "PascalCase")]
    CastColumnTypeOperation {
        column_name: String,
        new_column_type: ColumnDataType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
    #[serde(rename_all = "PascalCase")]
    TagColumnOperation {
        column_name: String,
        tags: Vec<ColumnTag>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JoinInstruction {
    pub left_operand: String,
    pub right_operand: String,
    #[serde(rename = "Type")]
    pub join_type: JoinType,
    pub on_clause: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogicalTableSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_instruction: Option<JoinInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_table_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogicalTable {
    pub alias: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_transforms: Vec<TransformOperation>,
    pub source: LogicalTableSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnDataType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoSpatialColumnGroup {
    pub name: String,
    /// Only `US` is accepted by the service.
    pub country_code: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_spatial_column_group: Option<GeoSpatialColumnGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RowLevelPermissionDataSet {
    pub arn: String,
    pub permission_policy: RowLevelPermissionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub physical_table_map: BTreeMap<String, PhysicalTable>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub logical_table_map: BTreeMap<String, LogicalTable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_columns: Vec<OutputColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_mode: Option<DataSetImportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_spice_capacity_in_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_groups: Vec<ColumnGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_level_permission_data_set: Option<RowLevelPermissionDataSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_mode: Option<DataSetImportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_level_permission_data_set: Option<RowLevelPermissionDataSet>,
}

// ── Data sources ────────────────────────────────────────────────────────

/// Host, port and database of a SQL engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseParameters {
    pub host: String,
    pub port: i32,
    pub database: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManifestFileLocation {
    pub bucket: String,
    pub key: String,
}

/// Connection parameters; the variant must match the data source type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataSourceParameters {
    #[serde(rename_all = "PascalCase")]
    AmazonElasticsearchParameters { domain: String },
    #[serde(rename_all = "PascalCase")]
    AthenaParameters {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        work_group: Option<String>,
    },
    AuroraParameters(DatabaseParameters),
    AuroraPostgreSqlParameters(DatabaseParameters),
    #[serde(rename_all = "PascalCase")]
    AwsIotAnalyticsParameters { data_set_name: String },
    #[serde(rename_all = "PascalCase")]
    JiraParameters { site_base_url: String },
    MariaDbParameters(DatabaseParameters),
    MySqlParameters(DatabaseParameters),
    PostgreSqlParameters(DatabaseParameters),
    #[serde(rename_all = "PascalCase")]
    PrestoParameters {
        host: String,
        port: i32,
        catalog: String,
    },
    #[serde(rename_all = "PascalCase")]
    RdsParameters { instance_id: String, database: String },
    #[serde(rename_all = "PascalCase")]
    RedshiftParameters {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        host: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        port: Option<i32>,
        database: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cluster_id: Option<String>,
    },
    #[serde(rename_all = "PascalCase")]
    S3Parameters { manifest_file_location: ManifestFileLocation },
    #[serde(rename_all = "PascalCase")]
    ServiceNowParameters { site_base_url: String },
    #[serde(rename_all = "PascalCase")]
    SnowflakeParameters {
        host: String,
        database: String,
        warehouse: String,
    },
    #[serde(rename_all = "PascalCase")]
    SparkParameters { host: String, port: i32 },
    SqlServerParameters(DatabaseParameters),
    TeradataParameters(DatabaseParameters),
    #[serde(rename_all = "PascalCase")]
    TwitterParameters { query: String, max_rows: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CredentialPair {
    pub username: String,
    pub password: String,
}

/// Credentials QuickSight uses to connect to a data source. Write-only.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_pair: Option<CredentialPair>,
}

impl std::fmt::Debug for DataSourceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSourceCredentials")
            .field(
                "username",
                &self.credential_pair.as_ref().map(|p| p.username.as_str()),
            )
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcConnectionProperties {
    pub vpc_connection_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SslProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceErrorInfo {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<DataSourceErrorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub data_source_type: Option<DataSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_parameters: Option<DataSourceParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_connection_properties: Option<VpcConnectionProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_properties: Option<SslProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_info: Option<DataSourceErrorInfo>,
}

// ── Users and groups ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<IdentityType>,
    /// False until the invited user accepts and signs in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
}

// ── IAM policy assignments ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IamPolicyAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    /// `"user"` / `"group"` to names.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub identities: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IamPolicyAssignmentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActiveIamPolicyAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

// ── Ingestions ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorInfo {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RowInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_ingested: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_dropped: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueInfo {
    pub waiting_on_ingestion: String,
    pub queued_ingestion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ingestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_status: Option<IngestionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_info: Option<ErrorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_info: Option<RowInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_info: Option<QueueInfo>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_time_in_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_size_in_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_source: Option<IngestionRequestSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<IngestionRequestType>,
}

// ── Templates ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographic_role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSetSchema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_schema_list: Vec<ColumnSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnGroupColumnSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnGroupSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_group_column_schema_list: Vec<ColumnGroupColumnSchema>,
}

/// The data set shape a template placeholder expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSetConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_schema: Option<DataSetSchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_group_schema_list: Vec<ColumnGroupSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateError {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateVersion {
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<TemplateError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_set_configurations: Vec<DataSetConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_entity_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<TemplateVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateAlias {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_version_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version_number: Option<i64>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateVersionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
    #[serde(default, with = "option_epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateSourceAnalysis {
    pub arn: String,
    pub data_set_references: Vec<DataSetReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateSourceTemplate {
    pub arn: String,
}

/// What a template version is created from; set exactly one member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateSourceEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_analysis: Option<TemplateSourceAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_template: Option<TemplateSourceTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn physical_table_is_tagged_by_member() {
        let table = PhysicalTable::CustomSql(CustomSql {
            data_source_arn: "arn:ds".into(),
            name: "q".into(),
            sql_query: "select 1".into(),
            columns: vec![InputColumn {
                name: "one".into(),
                column_type: InputColumnDataType::Integer,
            }],
        });
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({"CustomSql": {
                "DataSourceArn": "arn:ds",
                "Name": "q",
                "SqlQuery": "select 1",
                "Columns": [{"Name": "one", "Type": "INTEGER"}]
            }})
        );
    }

    #[test]
    fn transform_operations_wire_names() {
        let op = TransformOperation::RenameColumnOperation {
            column_name: "a".into(),
            new_column_name: "b".into(),
        };
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"RenameColumnOperation": {"ColumnName": "a", "NewColumnName": "b"}})
        );
        let cast: TransformOperation = serde_json::from_value(json!({
            "CastColumnTypeOperation": {"ColumnName": "d", "NewColumnType": "DATETIME"}
        }))
        .unwrap();
        assert_eq!(
            cast,
            TransformOperation::CastColumnTypeOperation {
                column_name: "d".into(),
                new_column_type: ColumnDataType::Datetime,
                format: None,
            }
        );
    }

    #[test]
    fn data_source_parameters_variants() {
        let p = DataSourceParameters::RdsParameters {
            instance_id: "db-1".into(),
            database: "sales".into(),
        };
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({"RdsParameters": {"InstanceId": "db-1", "Database": "sales"}})
        );
        let p = DataSourceParameters::MySqlParameters(DatabaseParameters {
            host: "h".into(),
            port: 3306,
            database: "d".into(),
        });
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({"MySqlParameters": {"Host": "h", "Port": 3306, "Database": "d"}})
        );
    }

    #[test]
    fn export_to_csv_option_wire_name() {
        let opts = DashboardPublishOptions {
            export_to_csv_option: Some(ExportToCsvOption {
                availability_status: Some(DashboardBehavior::Disabled),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({"ExportToCSVOption": {"AvailabilityStatus": "DISABLED"}})
        );
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let creds = DataSourceCredentials {
            credential_pair: Some(CredentialPair {
                username: "svc".into(),
                password: "hunter2".into(),
            }),
        };
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("svc"));
        assert!(!dbg.contains("hunter2"));
    }

    #[test]
    fn user_decodes() {
        let user: User = serde_json::from_value(json!({
            "Arn": "arn:aws:quicksight:us-east-1:111122223333:user/default/ana",
            "UserName": "ana",
            "Role": "AUTHOR",
            "IdentityType": "IAM",
            "Active": true
        }))
        .unwrap();
        assert_eq!(user.role, Some(UserRole::Author));
        assert_eq!(user.active, Some(true));
    }
}
