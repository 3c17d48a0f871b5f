mod addrs;
mod orchestration;
mod profiles;
mod scenario_spec;
