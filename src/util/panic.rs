#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

/// Like [`assert_panics`], but also checks that the payload equals `$expected` verbatim.
#[allow(unused_macros)]
macro_rules! assert_fails_with {
    ($run:block, $expected:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied());
                assert_eq!(message, Some($expected), "panic payload should be the error message");
                println!("^ panic caught");
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use {assert_fails_with, assert_panics};
