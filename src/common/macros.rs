#[macro_export]
macro_rules! log_err {
    // Usage: log_err!(&self.pool, "publish_draft", params);
    // Fire-and-forget: the write must never block or fail the caller.
    ($pool:expr, $operation:expr, $params:expr) => {{
        let pool_clone = $pool.clone();
        let location = format!("{}:{}", file!(), line!());
        let operation = $operation.to_string();

        let params_json = ::serde_json::to_value($params)
            .unwrap_or(::serde_json::Value::Null);

        ::tokio::spawn(async move {
            let _ = ::sqlx::query(
                r#"
                INSERT INTO error_logs (location, operation, parameters)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(location)
            .bind(operation)
            .bind(params_json)
            .execute(&pool_clone)
            .await;
        });
    }};
}
