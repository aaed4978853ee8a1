fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match wasmboy::parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            eprintln!("{}", wasmboy::USAGE);
            std::process::exit(2);
        }
    };

    let report = wasmboy::run(&config)?;

    if !report.serial.is_empty() {
        println!("{}", String::from_utf8_lossy(&report.serial));
    }

    let s = &report.final_state;
    println!(
        "{} steps, {} cycles. PC={:04X} SP={:04X} AF={:02X}{:02X} BC={:02X}{:02X} DE={:02X}{:02X} HL={:02X}{:02X} IME={}",
        report.steps, report.cycles, s.pc, s.sp, s.a, s.f, s.b, s.c, s.d, s.e, s.h, s.l, s.ime as u8,
    );
    println!("next: {:04X}: {}", report.next.addr, report.next.text);

    if let Some(fault) = report.fault {
        eprintln!("CPU fault: {fault}");
        std::process::exit(1);
    }
    Ok(())
}
