use schemacheck::{RecordBatch, SchemaValidator, ValidatorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "source": "elasticsearch",
    "database_schema": {"age": "long", "name": "text", "active": "boolean", "score": "float"},
    "extracted_fields": ["age", "name", "city", "active", "score"]
}"#;

const BATCH: &str = r#"{"age": 30, "name": "Alice", "city": "Oslo", "score": 0.9}
{"age": "thirty", "name": "Bob", "city": "Rome", "score": 1}
{"age": 25, "name": "Carol", "city": "Lima", "score": 0.4}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 示例：按 elasticsearch 类型映射校验一批记录
    let config = ValidatorConfig::from_json_str(CONFIG)?;
    let validator = SchemaValidator::from_config(&config)?;
    let batch = RecordBatch::from_json_lines(BATCH)?;

    info!(
        columns = ?batch.columns().collect::<Vec<_>>(),
        checked = ?validator.schema().field_names(),
        "validating batch"
    );

    let diagnostics = validator.validate(&batch);

    info!(
        fields = validator.schema().len(),
        rows = batch.len(),
        diagnostics = diagnostics.len(),
        "schema validation finished"
    );
    println!("{}", serde_json::to_string_pretty(&diagnostics)?);

    Ok(())
}
