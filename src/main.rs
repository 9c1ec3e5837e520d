use std::process::ExitCode;

fn main() -> ExitCode {
    gpu_sizer_lib::run()
}
