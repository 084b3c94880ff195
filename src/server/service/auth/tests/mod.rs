mod login;

use haven_test_utils::prelude::*;

use crate::server::{service::auth::AuthService, util::test::test_state};
