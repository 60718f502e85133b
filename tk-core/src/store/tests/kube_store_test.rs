use assertables::*;
use httpmock::Method::*;
use tk_api::v1alpha1::Task;

use super::*;

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_task() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_delete(tasks_path(Some(TEST_TASK_NAME))).build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    store.delete(TektonKind::Task, TEST_TASK_NAME).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_trigger_template() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_delete(trigger_templates_path(Some(TEST_TRIGGER_TEMPLATE_NAME)))
        .build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    store
        .delete(TektonKind::TriggerTemplate, TEST_TRIGGER_TEMPLATE_NAME)
        .await
        .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_not_found_is_an_error() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_not_found(task_runs_path(Some(TEST_TASK_RUN_NAME))).build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    let _ = store.delete(TektonKind::TaskRun, TEST_TASK_RUN_NAME).await.unwrap_err();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_returns_object() {
    // Foreground deletion hands back the object instead of a Status
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let task_run = test_task_run(TEST_TASK_RUN_NAME, TEST_TASK_NAME);
    fake_apiserver
        .handle(move |when, then| {
            when.method(DELETE).path(task_runs_path(Some(TEST_TASK_RUN_NAME)));
            then.json_body_obj(&task_run);
        })
        .build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    store.delete(TektonKind::TaskRun, TEST_TASK_RUN_NAME).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_task_returns_object(test_task: Task) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(move |when, then| {
            when.method(DELETE).path(tasks_path(Some(TEST_TASK_NAME)));
            then.json_body_obj(&test_task);
        })
        .build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    store.delete(TektonKind::Task, TEST_TASK_NAME).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
fn test_store_is_shareable_across_tasks() {
    fn shareable<T: Send + Sync + ?Sized>() {}
    shareable::<dyn ResourceStore>();
    shareable::<KubeStore>();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_task_runs() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let items: Vec<_> = ["tr-1", "tr-2"]
        .iter()
        .map(|name| serde_json::to_value(test_task_run(name, TEST_TASK_NAME)).unwrap())
        .collect();
    let selector = format!("tekton.dev/task={TEST_TASK_NAME}");
    fake_apiserver.handle_list(task_runs_path(None), selector.clone(), items).build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    let names = store.list(TektonKind::TaskRun, &selector).await.unwrap();
    assert_eq!(names, vec!["tr-1", "tr-2"]);
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_no_matches() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let selector = format!("tekton.dev/task={TEST_TASK_NAME}");
    fake_apiserver.handle_list(task_runs_path(None), selector.clone(), vec![]).build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    let names = store.list(TektonKind::TaskRun, &selector).await.unwrap();
    assert_is_empty!(names);
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_error() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(GET).path(task_runs_path(None));
            then.status(403).json_body(serde_json::json!({
                "kind": "Status",
                "apiVersion": "v1",
                "metadata": {},
                "status": "Failure",
                "message": "taskruns.tekton.dev is forbidden",
                "reason": "Forbidden",
                "code": 403
            }));
        })
        .build();

    let store = KubeStore::new(client, TEST_NAMESPACE);
    let _ = store.list(TektonKind::TaskRun, "tekton.dev/task=foo").await.unwrap_err();
    fake_apiserver.assert();
}
