use std::net::{Ipv4Addr, Ipv6Addr};

use dnscodec::{
    decode, encode, Aaaa, Cname, DnsError, Edns, EdnsOption, Header, Message, Mx, Naptr, Ns, Opt,
    Ptr, Question, RecordClass, RecordType, ResourceRecord, Soa, Spf, Srv, Txt, A,
};

fn a_query(name: &str) -> Message {
    let mut message = Message::new_reply(0xbeef);
    message
        .questions
        .push(Question::new(name, RecordType::A, RecordClass::IN));
    message
}

fn a_record(name: &str, addr: [u8; 4]) -> ResourceRecord {
    ResourceRecord::new(name, RecordClass::IN, 300, A::new(Ipv4Addr::from(addr)))
}

fn encode_vec(message: &Message, capacity: usize) -> Vec<u8> {
    message.to_bytes_with_capacity(capacity).unwrap()
}

#[test]
fn round_trip_every_record_type() {
    let mut message = Message {
        header: Header {
            id: 0xffff,
            query_response: true,
            opcode: 0b0101,
            authoritative_answer: true,
            truncation: false,
            recursion_desired: true,
            recursion_available: true,
            reserved: 0b011,
            response_code: 0xABC,
        },
        questions: vec![Question::new("example.com", RecordType::ANY, RecordClass::IN)],
        edns: Some(Edns {
            udp_payload_size: 1232,
            version: 0,
            dnssec_ok: true,
            options: vec![
                EdnsOption::new(10, vec![0xde, 0xad, 0xbe, 0xef, 0, 1, 2, 3]),
                EdnsOption::new(12, vec![0; 16]),
                EdnsOption::new(3, Vec::new()),
            ],
        }),
        ..Default::default()
    };

    message.answers = vec![
        a_record("example.com", [93, 184, 216, 34]),
        ResourceRecord::new(
            "example.com",
            RecordClass::IN,
            300,
            Aaaa::new("2606:2800:220:1:248:1893:25c8:1946".parse::<Ipv6Addr>().unwrap()),
        ),
        ResourceRecord::new("www.example.com", RecordClass::IN, 60, Cname::new("example.com")),
        ResourceRecord::new("example.com", RecordClass::IN, 3600, Mx::new(10, "mail.example.com")),
        ResourceRecord::new("example.com", RecordClass::IN, 3600, Txt::new("v=spf1 -all")),
        ResourceRecord::new("example.com", RecordClass::IN, 3600, Spf::new("v=spf1 -all")),
        ResourceRecord::new(
            "_sip._udp.example.com",
            RecordClass::IN,
            86400,
            Srv::new(10, 60, 5060, "sip.example.com"),
        ),
        ResourceRecord::new(
            "example.com",
            RecordClass::IN,
            86400,
            Naptr {
                order: 100,
                preference: 10,
                flags: String::from("S"),
                service: String::from("SIP+D2U"),
                regexp: String::new(),
                replacement: String::from("_sip._udp.example.com"),
            },
        ),
        ResourceRecord::new(
            "34.216.184.93.in-addr.arpa",
            RecordClass::IN,
            600,
            Ptr::new("example.com"),
        ),
    ];
    message.authorities = vec![
        ResourceRecord::new("example.com", RecordClass::IN, 172800, Ns::new("a.iana-servers.net")),
        ResourceRecord::new(
            "example.com",
            RecordClass::IN,
            3600,
            Soa {
                primary: String::from("ns.icann.org"),
                admin: String::from("noc.dns.icann.org"),
                serial: 2024081448,
                refresh: 7200,
                retry: 3600,
                expiration: 1209600,
                minimum: 3600,
            },
        ),
    ];
    message.additionals = vec![
        a_record("a.iana-servers.net", [199, 43, 135, 53]),
        ResourceRecord::new("", RecordClass::CH, 0, Txt::new("")),
    ];

    let bytes = message.to_bytes().unwrap();

    // Counts include the OPT record ahead of the two additional records
    assert_eq!(&bytes[4..12], &[0, 1, 0, 9, 0, 2, 0, 3]);
    assert_eq!(decode(&bytes).unwrap(), message);
}

#[test]
fn a_record_scenario() {
    let mut message = a_query("example.com");
    message.answers.push(a_record("example.com", [93, 184, 216, 34]));

    let bytes = encode_vec(&message, 512);

    assert_eq!(bytes.len(), 45);
    assert_eq!(&bytes[6..8], &[0, 1]);
    assert_eq!(&bytes[41..45], &[93, 184, 216, 34]);
    assert_eq!(decode(&bytes).unwrap(), message);
}

#[test]
fn shared_suffix_is_compressed() {
    let mut message = a_query("foo.example.com");
    message.answers.push(a_record("foo.example.com", [10, 0, 0, 1]));
    message.answers.push(a_record("bar.example.com", [10, 0, 0, 2]));

    let bytes = encode_vec(&message, 512);

    // The first answer points at the question name
    assert_eq!(&bytes[33..35], &[0xC0, 12]);
    // The second one only spells out its first label
    assert_eq!(&bytes[49..55], &[3, b'b', b'a', b'r', 0xC0, 16]);

    let decoded = decode(&bytes).unwrap();
    assert_eq!(decoded.answers[0].name, "foo.example.com");
    assert_eq!(decoded.answers[1].name, "bar.example.com");
}

#[test]
fn additional_records_are_truncated() {
    let mut message = a_query("example.com");
    message.answers.push(a_record("example.com", [93, 184, 216, 34]));
    message
        .additionals
        .push(a_record("ns.example.com", [192, 0, 2, 53]));

    assert_eq!(encode_vec(&message, 512).len(), 64);

    let mut buffer = [0u8; 50];
    let len = encode(&message, &mut buffer).unwrap();
    assert_eq!(len, 45);

    let decoded = decode(&buffer[..len]).unwrap();
    assert!(decoded.header.truncation);
    assert_eq!(decoded.answers, message.answers);
    assert!(decoded.additionals.is_empty());
}

#[test]
fn truncation_keeps_records_of_the_current_section() {
    let mut message = a_query("example.com");
    message.answers.push(a_record("example.com", [93, 184, 216, 34]));
    message
        .additionals
        .push(a_record("ns.example.com", [192, 0, 2, 53]));
    message
        .additionals
        .push(a_record("ns.example.com", [192, 0, 2, 54]));

    let bytes = encode_vec(&message, 70);

    assert_eq!(bytes.len(), 64);
    assert_eq!(&bytes[6..12], &[0, 1, 0, 0, 0, 1]);

    let decoded = decode(&bytes).unwrap();
    assert!(decoded.header.truncation);
    assert_eq!(decoded.additionals, &message.additionals[..1]);
}

#[test]
fn edns_round_trip() {
    let mut message = a_query("example.com");
    message.edns = Some(Edns {
        dnssec_ok: true,
        ..Edns::new(4096)
    });

    let decoded = decode(&encode_vec(&message, 512)).unwrap();
    let edns = decoded.edns.as_ref().unwrap();

    assert_eq!(edns.version, 0);
    assert!(edns.dnssec_ok);
    assert_eq!(edns.udp_payload_size, 4096);
    assert!(decoded.additionals.is_empty());
    assert_eq!(decoded, message);
}

#[test]
fn edns_is_only_sent_through_the_edns_field() {
    let mut message = a_query("example.com");
    message.additionals.push(ResourceRecord::new(
        "",
        RecordClass::from(1232),
        0,
        Opt::default(),
    ));

    assert_eq!(message.to_bytes(), Err(DnsError::MisplacedOptRecord));

    let mut expected = a_query("example.com");
    expected.edns = Some(Edns::new(1232));
    let decoded = decode(&expected.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, expected);
}

#[test]
fn out_of_range_header_fields_are_rejected() {
    let mut message = a_query("example.com");
    message.header.opcode = 0x1F;

    assert!(matches!(
        message.to_bytes(),
        Err(DnsError::HeaderFieldOutOfRange { field: "opcode", .. })
    ));

    message.header.opcode = 0x0F;
    message.header.reserved = 0x07;
    let bytes = message.to_bytes().unwrap();
    assert_eq!(decode(&bytes).unwrap(), message);
}

#[test]
fn pointer_past_the_end_is_rejected() {
    let mut bytes = encode_vec(&a_query("example.com"), 512);

    // Question name replaced by a pointer behind the end of the message
    bytes.truncate(12);
    bytes.extend_from_slice(&[0xC0, 0xFF, 0, 1, 0, 1]);

    assert_eq!(
        decode(&bytes),
        Err(DnsError::InvalidCompressionPointer { at: 12, target: 255 })
    );
}

#[test]
fn pointer_inside_rdata_resolves_against_message() {
    let mut message = a_query("example.com");
    message.answers.push(ResourceRecord::new(
        "www.example.com",
        RecordClass::IN,
        60,
        Cname::new("example.com"),
    ));

    let bytes = encode_vec(&message, 512);

    // rdata is only a pointer to the question name
    assert_eq!(&bytes[bytes.len() - 4..], &[0, 2, 0xC0, 12]);
    assert_eq!(decode(&bytes).unwrap(), message);

    // Cutting the message in the middle of the rdata is a parse error
    assert!(decode(&bytes[..bytes.len() - 1]).is_err());
}

#[test]
fn naptr_strings_of_every_size() {
    for len in [0, 1, 63, 64, 127, 128, 254, 255] {
        let text = "a".repeat(len);
        let mut message = a_query("example.com");
        message.answers.push(ResourceRecord::new(
            "example.com",
            RecordClass::IN,
            60,
            Naptr {
                order: len as u16,
                preference: 0,
                flags: text.clone(),
                service: text.clone(),
                regexp: text.clone(),
                replacement: text,
            },
        ));

        let bytes = message.to_bytes().unwrap();
        assert_eq!(decode(&bytes).unwrap(), message);
    }
}

#[test]
fn unsupported_record_type_is_rejected() {
    let mut bytes = encode_vec(&a_query("example.com"), 512);
    bytes[7] = 1;
    // Root owner, type 48 (DNSKEY), class IN, ttl 0, empty rdata
    bytes.extend_from_slice(&[0, 0, 48, 0, 1, 0, 0, 0, 0, 0, 0]);

    assert_eq!(decode(&bytes), Err(DnsError::UnsupportedRecordType(48)));
}

#[test]
fn truncated_input_is_rejected() {
    let mut message = a_query("example.com");
    message.answers.push(a_record("example.com", [93, 184, 216, 34]));
    let bytes = encode_vec(&message, 512);

    for len in [0, 5, 11, 20, 29, 40, 44] {
        assert!(
            matches!(decode(&bytes[..len]), Err(DnsError::LengthViolation { .. })),
            "length {len}"
        );
    }
}

#[test]
fn encode_and_decode_on_many_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            std::thread::spawn(move || {
                let mut message = a_query(&format!("host{i}.example.com"));
                message.answers.push(a_record("example.com", [10, 0, 0, i]));
                let bytes = message.to_bytes().unwrap();
                decode(&bytes).unwrap() == message
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
