mod login_test;
mod register_test;
mod router_test;
