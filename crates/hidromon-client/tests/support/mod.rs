pub mod snapshot_testkit;
