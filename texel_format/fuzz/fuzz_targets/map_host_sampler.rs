#![no_main]

use libfuzzer_sys::fuzz_target;
use texel_format::*;

fuzz_target!(|sampler: Sampler| {
    if let Ok(info) = map_host_sampler(&sampler) {
        let mapped = map_sampler(&info).unwrap();
        assert_eq!(sampler.wrap_s, mapped.wrap_s);
        assert_eq!(sampler.min_filter, mapped.min_filter);
        assert_eq!(sampler.compare, mapped.compare);
    }
});
