use una::{BoardId, Error, Node, NodeAddress, NodeList};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn full_list() -> NodeList {
    let mut list = NodeList::new();
    for raw in 0..NodeAddress::LAST {
        let address = NodeAddress::new(raw).unwrap();
        let board_id = address.board_family().unwrap_or(BoardId::Error);
        list.push(Node::new(address, board_id)).unwrap();
    }
    list
}

#[test]
fn fills_every_address() {
    init_logger();
    let list = full_list();
    assert_eq!(list.len(), una::node::NODE_LIST_CAPACITY);
    assert!(list.slots().iter().all(|node| !node.is_unassigned()));
    assert_eq!(
        list.find(NodeAddress::R4S8CR_END).map(|node| node.board_id),
        Some(BoardId::R4s8cr)
    );
    // every address is taken, so any further node is a duplicate
    assert!(matches!(
        list.clone().push(Node::new(NodeAddress::MASTER, BoardId::Dmm)),
        Err(Error::DuplicateNode(0x00))
    ));
}

#[test]
fn reset_clears_a_full_list() {
    init_logger();
    let mut list = full_list();
    list.reset();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.iter().next().is_none());
    for node in list.slots() {
        assert_eq!(node.address, NodeAddress::ERROR);
        assert_eq!(node.board_id, BoardId::Error);
    }
    assert_eq!(list, NodeList::default());
}

#[test]
fn reset_then_repopulate() {
    init_logger();
    let mut list = NodeList::new();
    list.push(Node::new(NodeAddress::GPSM, BoardId::Gpsm)).unwrap();
    list.reset();
    list.reset();
    list.push(Node::new(NodeAddress::UHFM, BoardId::Uhfm)).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Some(&Node::new(NodeAddress::UHFM, BoardId::Uhfm)));
    assert!(list.find(NodeAddress::GPSM).is_none());
}

#[test]
fn shared_behind_a_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    init_logger();
    let list = Arc::new(Mutex::new(NodeList::new()));
    let handles: Vec<_> = (0..una::node::NODE_ADDRESS_RANGE_LVRM)
        .map(|i| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                let address = NodeAddress::new(NodeAddress::LVRM_START.into_u8() + i).unwrap();
                list.lock().unwrap().push(Node::new(address, BoardId::Lvrm)).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(list.lock().unwrap().len(), 8);
}
