use quill_core::{cond, op, query, FilterTree, Result, Value};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Join two tables and filter with a mix of operators
    let mut merchants = query();
    merchants
        .select(vec!["M.name", "M.id", "M._deleteDate", "S._deleteDate"])
        .from("Merchant")
        .alias("M")
        .inner_join("Store")
        .alias("S")
        .on(&FilterTree::new(vec![
            cond("S.__merchantId", op::EQ, "M.id"),
            cond("S.id", op::EQ, "M.id"),
        ]))?
        .where_(&FilterTree::new(vec![
            cond("S._deleteDate", op::IS, Value::Null),
            cond("M._deleteDate", op::IS, Value::Null),
            cond("M.name", op::IN, vec![1, 2, 3, 4, 5]),
            cond("S.city", op::LIKE, "%london%"),
            cond(
                "S.timestamp",
                op::BETWEEN,
                vec!["2018-01-01 00:00:00", "2018-07-01 00:00:00"],
            ),
        ]))?
        .limit(1, Some(10));

    merchants.log();
    println!("SELECT SQL: {}", merchants.to_sql());

    // The same filter shape, interpreted from untyped JSON
    let filters = FilterTree::from_json(&serde_json::json!([
        { "city": { "$like": "%paris%" } },
        [{ "rating": { "$gte": 4 } }, { "featured": { "$is": true } }]
    ]))?;

    let mut stores = query();
    stores.select_all().from("Store").where_(&filters)?;
    println!("JSON-driven SQL: {}", stores.to_sql());

    // Sub-builders compose as union members
    let mut active = query();
    active.select(vec!["id"]).from("Merchant");
    let mut archived = query();
    archived.select(vec!["id"]).from("MerchantArchive");

    let mut all_ids = query();
    all_ids.union([&active, &archived]);
    println!("UNION SQL: {}", all_ids.to_sql());

    Ok(())
}
