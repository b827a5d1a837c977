use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    ticket_reconcile::app::run_reconcile(std::env::args().skip(1))
}
