use std::fs;
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs, UdpSocket};
use std::path::Path;
use sysinfo::System;

pub fn hostname() -> String {
    System::host_name().unwrap_or_else(|| "localhost".into())
}

/// Address of the interface used for outbound traffic. Connecting a UDP
/// socket only selects a route; no datagram is sent.
pub fn local_ip(hostname: &str) -> IpAddr {
    let routed = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
        .and_then(|socket| {
            socket.connect(("8.8.8.8", 80))?;
            socket.local_addr()
        })
        .map(|addr| addr.ip());

    match routed {
        Ok(ip) => ip,
        Err(e) => {
            log::debug!("Could not determine routed address: {e}");
            format!("{hostname}.local:0")
                .to_socket_addrs()
                .ok()
                .and_then(|mut addrs| addrs.next())
                .map(|addr| addr.ip())
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
        }
    }
}

/// First line of the stored key file, or an empty string when there is none.
pub fn load_api_key(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return String::new();
    };
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .next()
            .map(|line| line.trim_end().to_string())
            .unwrap_or_default(),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Could not read API key file {}: {e}", path.display());
            }
            String::new()
        }
    }
}
