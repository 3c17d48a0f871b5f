//! 链式拓扑构建

use std::net::Ipv4Addr;

use crate::net::{HostAddr, NodeId, OpenFlowVersion, Topology, host_mac};

/// 链式拓扑配置选项
#[derive(Debug, Clone)]
pub struct ChainOpts {
    pub switches: usize,
    pub hosts_per_switch: usize,
    /// 每台主机的单核 CPU 配额
    pub cpu_frac: f64,
    /// 主机网段基址，主机 k 的地址是 base + k
    pub base_ip: Ipv4Addr,
    pub prefix_len: u8,
    pub protocol: OpenFlowVersion,
}

impl Default for ChainOpts {
    fn default() -> Self {
        Self {
            switches: 6,
            hosts_per_switch: 3,
            cpu_frac: 1.0 / 20.0,
            base_ip: Ipv4Addr::new(10, 0, 0, 0),
            prefix_len: 24,
            protocol: OpenFlowVersion::OpenFlow13,
        }
    }
}

/// 链式拓扑句柄
#[derive(Debug, Clone)]
pub struct ChainTopo {
    pub hosts_per_switch: usize,
    pub switches: Vec<NodeId>,
    pub hosts: Vec<NodeId>,
}

impl ChainTopo {
    pub fn host(&self, switch: usize, slot: usize) -> NodeId {
        self.hosts[switch * self.hosts_per_switch + slot]
    }
}

/// 构建链式拓扑
///
/// 拓扑结构：s1 - s2 - … - sN 链式相连，每台交换机下挂固定数量的
/// 主机。主机 hk 获得静态地址 base+k 和按十进制编号编码的 MAC。
pub fn build_chain(topo: &mut Topology, opts: &ChainOpts) -> ChainTopo {
    assert!(
        opts.switches >= 1 && opts.hosts_per_switch >= 1,
        "chain needs at least one switch and one host per switch"
    );
    let total = opts.switches * opts.hosts_per_switch;
    assert!(
        total < 100,
        "decimal MAC encoding and /24 addressing cover at most 99 hosts"
    );

    let base = u32::from(opts.base_ip);
    let mut switches = Vec::with_capacity(opts.switches);
    let mut hosts = Vec::with_capacity(total);

    for s in 0..opts.switches {
        let sid = topo.add_switch(format!("s{}", s + 1), opts.protocol);

        for slot in 0..opts.hosts_per_switch {
            let k = s * opts.hosts_per_switch + slot + 1;
            let addr = HostAddr::new(Ipv4Addr::from(base + k as u32), opts.prefix_len);
            let hid = topo.add_host(format!("h{k}"), host_mac(k as u8), addr, opts.cpu_frac);
            topo.link(hid, sid)
                .expect("host-switch edges are unique by construction");
            hosts.push(hid);
        }

        switches.push(sid);
    }

    for pair in switches.windows(2) {
        topo.link(pair[0], pair[1])
            .expect("chain edges are unique by construction");
    }

    ChainTopo {
        hosts_per_switch: opts.hosts_per_switch,
        switches,
        hosts,
    }
}
