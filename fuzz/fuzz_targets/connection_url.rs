#![no_main]

use libfuzzer_sys::fuzz_target;
use mysql_client::{ConnectionFactoryProvider, ConnectionOptions, MySqlConnectionFactoryProvider, resolve};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(options) = ConnectionOptions::parse(s) else {
        return;
    };

    let provider = MySqlConnectionFactoryProvider::new();
    let _ = provider.supports(&options);
    let _ = resolve(Some(&options));
});
