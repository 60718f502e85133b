mod params_test;

use std::path::PathBuf;

use assert_fs::prelude::*;
use assertables::*;
use rstest::*;
use tk_testutils::*;
use tracing_test::traced_test;

use super::*;

fn write_kubeconfig(dir: &assert_fs::TempDir, server: &str) -> PathBuf {
    let kubeconfig = dir.child("kubeconfig");
    kubeconfig
        .write_str(&format!(
            r#"
apiVersion: v1
kind: Config
current-context: fake
clusters:
- name: fake
  cluster:
    server: {server}
contexts:
- name: fake
  context:
    cluster: fake
    user: fake
    namespace: {TEST_NAMESPACE}
- name: other
  context:
    cluster: fake
    user: fake
    namespace: other-namespace
users:
- name: fake
  user: {{}}
"#
        ))
        .unwrap();
    kubeconfig.path().to_path_buf()
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
