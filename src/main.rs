use loadsweep::error::AppResult;

fn main() -> AppResult<()> {
    loadsweep::entry::run()
}
