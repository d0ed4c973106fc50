use tokio::io::{stdin, stdout, BufReader};

#[tokio::main]
async fn main() -> ringq::error::Result<()> {
    ringq::run(BufReader::new(stdin()), stdout()).await
}
