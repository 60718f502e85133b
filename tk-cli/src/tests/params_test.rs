use super::params::Params;
use super::*;

#[rstest]
#[tokio::test]
async fn test_clients_namespace_from_context() {
    let dir = assert_fs::TempDir::new().unwrap();
    let params = Params {
        kubeconfig: Some(write_kubeconfig(&dir, "http://127.0.0.1:1/")),
        ..Default::default()
    };

    let (_, namespace) = params.clients().await.unwrap();
    assert_eq!(namespace, TEST_NAMESPACE);
}

#[rstest]
#[tokio::test]
async fn test_clients_named_context() {
    let dir = assert_fs::TempDir::new().unwrap();
    let params = Params {
        kubeconfig: Some(write_kubeconfig(&dir, "http://127.0.0.1:1/")),
        context: Some("other".into()),
        ..Default::default()
    };

    let (_, namespace) = params.clients().await.unwrap();
    assert_eq!(namespace, "other-namespace");
}

#[rstest]
#[tokio::test]
async fn test_clients_namespace_flag_wins() {
    let dir = assert_fs::TempDir::new().unwrap();
    let params = Params {
        kubeconfig: Some(write_kubeconfig(&dir, "http://127.0.0.1:1/")),
        namespace: Some("quux".into()),
        ..Default::default()
    };

    let (_, namespace) = params.clients().await.unwrap();
    assert_eq!(namespace, "quux");
}

#[rstest]
#[case::missing_file(Some("does-not-exist"), None)]
#[case::unknown_context(None, Some("nope"))]
#[tokio::test]
async fn test_clients_failure(#[case] missing_path: Option<&str>, #[case] context: Option<&str>) {
    let dir = assert_fs::TempDir::new().unwrap();
    let kubeconfig = match missing_path {
        Some(p) => dir.path().join(p),
        None => write_kubeconfig(&dir, "http://127.0.0.1:1/"),
    };
    let params = Params {
        kubeconfig: Some(kubeconfig),
        context: context.map(String::from),
        ..Default::default()
    };

    let Err(err) = params.clients().await else {
        panic!("expected client construction to fail");
    };
    assert_eq!(format!("{err}"), "failed to create tekton client");
}
