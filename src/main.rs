#[tokio::main]
async fn main() {
    tutor_marketplace::run().await;
}
