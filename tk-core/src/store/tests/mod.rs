mod kube_store_test;

use rstest::*;
use tk_testutils::*;
use tracing_test::traced_test;

use super::*;
