#[actix_web::main]
async fn main() -> std::io::Result<()> {
    casegen_lib::run().await
}
