//! Common SCL source fixtures for tests.

pub const SIMPLE_TYPE: &str = "type Acc { bal: int; }";

pub const EMPTY_CONTEXT: &str = "context C {}";

pub const ASSERT_STATE: &str = "state S uses Acc { assert 1 < 2; next { otherwise => S } }";

pub const BANKING: &str = r#"
// Account model
type Account {
    id: int;
    owner: string;
    balance: float;
    history: List[Entry];
}

type Entry {
    amount: int;
}

context Session {
    user: string;
    limits: Map[int];
}

state Withdraw uses Account, Entry {
    use state "bank"::Open { id: int; }
    use context Session;
    use type "bank"::Money;

    precondition {
        \E Relation Account a by id : a.balance >= 0;
        ~(cap > 1000) \/ approved;
    }

    let amount: int = 50;
    select acc: Account from Account where acc.id = id limit 1;
    foreach e: Entry in history {
        assert e.amount # 0;
    }
    update Account set balance = balance - amount where id = 1;
    insert into Entry (amount) values (-amount);
    delete from Entry where amount = 0;
    assert amount <= 100;
    commit;

    next {
        when amount > 100 /\ ~approved => Review { export amount: int; }
        when (a => b) => Withdraw
        otherwise => Done
    }
}
"#;

pub const MINIMAL_STATE: &str = "state S uses Acc { next { otherwise => S } }";

/// Clause words used as column, entity and field names
pub const PAGINATION: &str = r#"
type Page { limit: int; from: int; values: List[string]; }

state Paginate uses Page {
    pre { \E Relation Page p by p.limit : p.from >= 0; }
    select page: Page from Page where limit > 0 limit 10;
    update Page set from = from + limit where by = 1;
    insert into Page (limit, from) values (limit, 0);
    next { when from > limit => Paginate { export set: int; } otherwise => Paginate }
}
"#;

pub const ALL_FIXTURES: &[&str] = &[
    SIMPLE_TYPE,
    EMPTY_CONTEXT,
    ASSERT_STATE,
    BANKING,
    MINIMAL_STATE,
    PAGINATION,
];
