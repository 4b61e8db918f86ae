mod analyze_test;
mod generate_test;
mod health_test;
mod live_test;
