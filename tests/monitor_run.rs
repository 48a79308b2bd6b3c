use seo_monitor::config::MonitorConfig;
use seo_monitor::fetcher::HttpFetcher;
use seo_monitor::pipeline::run_monitor;

const HOME_PAGE: &str = r#"<html>
<head>
  <title>Rust SEO Tools</title>
  <meta name="description" content="Monitoring keywords with Rust">
  <script>var seo = "hidden";</script>
</head>
<body>
  <h1>Keyword monitoring</h1>
  <p>Track your SEO with rust tools.</p>
  <img src="logo.png">
</body>
</html>"#;

#[tokio::test]
async fn test_full_run_from_config_file() {
    let mut server = mockito::Server::new_async().await;
    let home = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(HOME_PAGE)
        .create_async()
        .await;
    let missing = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("results");
    let config_path = dir.path().join("config.json");
    let config_json = serde_json::json!({
        "sites": {
            (format!("{}/", server.url())): ["seo", "rust tools", "python"],
            (format!("{}/missing", server.url())): ["seo"],
        },
        "timeout_secs": 5,
        "output_dir": output_dir,
        "write_json": true,
    });
    std::fs::write(&config_path, config_json.to_string()).unwrap();

    let config = MonitorConfig::load(&config_path).await.unwrap();
    let fetcher = HttpFetcher::new(&config.settings).unwrap();
    let (report, files) = run_monitor(&config, &fetcher, |_| {}).await.unwrap();

    home.assert_async().await;
    missing.assert_async().await;

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);

    let csv = std::fs::read_to_string(&files.csv).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 1 + 4);
    assert_eq!(
        rows[0],
        "site,keyword,found,position,meta_title,meta_description,fetch_time_ms"
    );

    let home_url = format!("{}/", server.url());
    // Visible words: keyword monitoring track your seo with rust tools
    assert!(rows[1].starts_with(&format!(
        "{},seo,true,4,Rust SEO Tools,Monitoring keywords with Rust,",
        home_url
    )));
    assert!(rows[2].starts_with(&format!("{},rust tools,true,6,", home_url)));
    assert!(rows[3].starts_with(&format!("{},python,false,-1,", home_url)));
    assert_eq!(rows[4], format!("{}/missing,seo,false,-1,,,", server.url()));

    let text = std::fs::read_to_string(&files.text).unwrap();
    assert!(text.contains("- Title: Rust SEO Tools"));
    assert!(text.contains("- Missing Alt Tags: 1"));
    assert!(text.contains("- Failed: HTTP error: status 404"));

    assert!(files.json.unwrap().exists());

    let log = std::fs::read_to_string(&files.log).unwrap();
    assert_eq!(log.lines().count(), 4);
    assert!(log.contains("ERROR - "));
}

#[tokio::test]
async fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = MonitorConfig::load(dir.path().join("config.json")).await;
    assert!(matches!(
        result,
        Err(seo_monitor::config::ConfigError::NotFound(_))
    ));
}
