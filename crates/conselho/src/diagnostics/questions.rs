//! Static assessment content. These tables are fixed business material and
//! change only when the methodology itself changes.

use super::behavioral::Profile;
use super::strategic::Focus;

/// Number of strategic statements assigned to each focus.
pub const QUESTIONS_PER_FOCUS: usize = 8;

/// Number of items in the company-phase checklist.
pub const PHASE_CHECKLIST_LEN: usize = 30;

/// One statement of the strategic maturity assessment.
#[derive(Debug, Clone, Copy)]
pub struct StrategicQuestion {
    pub id: char,
    pub text: &'static str,
    pub focus: Focus,
}

const STRATEGIC_QUESTIONS: [StrategicQuestion; 24] = [
    StrategicQuestion {
        id: 'A',
        text: "Every banking matter in the company depends on me.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'B',
        text: "I hold at least one weekly alignment meeting with each department.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'C',
        text: "I receive the finished financial report and run a monthly analysis of the company.",
        focus: Focus::Strategic,
    },
    StrategicQuestion {
        id: 'D',
        text: "I hold a monthly meeting and present the numbers to the team.",
        focus: Focus::Strategic,
    },
    StrategicQuestion {
        id: 'E',
        text: "I spend one or more days a week developing the product or service.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'F',
        text: "I help the operational team whenever demand spikes or something unexpected happens.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'G',
        text: "I take an active part in the sales strategy.",
        focus: Focus::Strategic,
    },
    StrategicQuestion {
        id: 'H',
        text: "I take calls and direct contacts from customers about tickets and problems.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'I',
        text: "I analyze the performance indicators and approve the improvement actions.",
        focus: Focus::Strategic,
    },
    StrategicQuestion {
        id: 'J',
        text: "I visit customers, analyze their processes and bring back improvements to implement.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'K',
        text: "The company's indicators are defined and I hold feedback meetings about performance.",
        focus: Focus::Strategic,
    },
    StrategicQuestion {
        id: 'L',
        text: "I am the one who fixes technical problems such as internet, phones, third-party tools and broken equipment.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'M',
        text: "I research new technologies and tools to improve the product or service.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'N',
        text: "I own specific areas of the product or service that only I am able to change or improve.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'O',
        text: "I define the commercial strategies, analyze performance and drive the improvements.",
        focus: Focus::Strategic,
    },
    StrategicQuestion {
        id: 'P',
        text: "I arrange and follow up maintenance of the company's physical structures such as equipment, painting and construction work.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'Q',
        text: "I keep security cameras in my office to monitor every department and I step in when problems appear.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'R',
        text: "I keep a panel or dashboard in my office with the data relevant to my daily decisions.",
        focus: Focus::Strategic,
    },
    StrategicQuestion {
        id: 'S',
        text: "I hold periodic meetings only with the leaders of each department to monitor performance, without their subordinates.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'T',
        text: "All company meetings involve the staff and results are checked individually.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'U',
        text: "I spend part of my time fixing problems reported by customers.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'V',
        text: "Each customer gets a different negotiation and the individual commercial plan depends on my approval.",
        focus: Focus::Tactical,
    },
    StrategicQuestion {
        id: 'X',
        text: "I make sure the company's basic needs are covered, such as purchasing, cleaning and kitchen supplies.",
        focus: Focus::Operational,
    },
    StrategicQuestion {
        id: 'Z',
        text: "I actively improve the company's acquisition channels, following new trends and analyzing past market behavior.",
        focus: Focus::Strategic,
    },
];

pub fn strategic_questions() -> &'static [StrategicQuestion] {
    &STRATEGIC_QUESTIONS
}

const PHASE_CHECKLIST: [&str; PHASE_CHECKLIST_LEN] = [
    "The dream is defined and clear",
    "The super vision is written clearly in up to 143 characters",
    "There is a written, measurable vision for the year shared at every level of the company",
    "There is a written value proposition that clearly states the competitive edge",
    "Principles and values are defined and shared at every level of the organization",
    "The company's mission is defined and shared across the whole company",
    "The company culture is written down and shared",
    "Annual goals are clear and shared at every level of the company",
    "Product and service prices are calculated and their margins are planned",
    "The flagship-product concept is in place",
    "There is a marketing strategy for at least three sales channels",
    "There are performance indicators per sales channel to analyze the funnels",
    "There is a formal review meeting for sales indicators applying PDCA",
    "There is a sales strategy per funnel with scripts defined",
    "The main sales objections are mapped with rebuttal scripts",
    "An efficient hiring and selection process is defined and in place",
    "There is a formal process for performance review and personal development",
    "A performance-indicator tool covers the company's four pillars",
    "A 12-month financial plan sets revenue, expenses and profit",
    "Monthly management meetings debate the strategic decisions",
    "There is a tool for cash-flow analysis and planning",
    "Continuous-improvement tools are used (PDCA, SWOT, time management)",
    "There is an official channel for the spiritual development of employees",
    "Production processes are set by procedures and work instructions",
    "There is a current and future org chart with a role description per position",
    "There is an external quality audit process",
    "There is an external audit process for finance and tax",
    "An administrative board is in place at the company",
    "The company runs social actions and gives back to society",
    "The Kingdom is visibly being established through the company",
];

pub fn phase_checklist() -> &'static [&'static str; PHASE_CHECKLIST_LEN] {
    &PHASE_CHECKLIST
}

/// One answer option of a behavioral question, tied to the profile it scores.
#[derive(Debug, Clone, Copy)]
pub struct BehavioralOption {
    pub text: &'static str,
    pub profile: Profile,
}

/// One of the fifteen behavioral questions. Each offers three options drawn
/// from a single triad.
#[derive(Debug, Clone, Copy)]
pub struct BehavioralQuestion {
    pub number: u8,
    pub text: &'static str,
    pub options: [BehavioralOption; 3],
}

const BEHAVIORAL_QUESTIONS: [BehavioralQuestion; 15] = [
    BehavioralQuestion {
        number: 1,
        text: "What is your strongest inner motivation?",
        options: [
            BehavioralOption {
                text: "Doing things the correct, perfect way.",
                profile: Profile::Perfectionist,
            },
            BehavioralOption {
                text: "Being noticed and recognized for helping people.",
                profile: Profile::Helper,
            },
            BehavioralOption {
                text: "Hitting goals, succeeding and being admired.",
                profile: Profile::Achiever,
            },
        ],
    },
    BehavioralQuestion {
        number: 2,
        text: "What bothers or stresses you most day to day?",
        options: [
            BehavioralOption {
                text: "Routine and the feeling of not being understood or heard.",
                profile: Profile::Individualist,
            },
            BehavioralOption {
                text: "Intrusions on my space and excessive emotional demands.",
                profile: Profile::Observer,
            },
            BehavioralOption {
                text: "Threats to my security and losing control of situations.",
                profile: Profile::Loyalist,
            },
        ],
    },
    BehavioralQuestion {
        number: 3,
        text: "How do you react to a new project?",
        options: [
            BehavioralOption {
                text: "With great enthusiasm, optimism and a hunger for novelty.",
                profile: Profile::Enthusiast,
            },
            BehavioralOption {
                text: "Taking charge with high energy, ready to confront if needed.",
                profile: Profile::Challenger,
            },
            BehavioralOption {
                text: "Harmonizing the team and finding the simplest, most peaceful path.",
                profile: Profile::Peacemaker,
            },
        ],
    },
    BehavioralQuestion {
        number: 4,
        text: "What is your emotional vice or negative tendency under pressure?",
        options: [
            BehavioralOption {
                text: "Anger and indignation when things go wrong.",
                profile: Profile::Perfectionist,
            },
            BehavioralOption {
                text: "Pride (wanting to help everyone yet struggling to ask for help).",
                profile: Profile::Helper,
            },
            BehavioralOption {
                text: "Vanity (excessive concern with the image of success).",
                profile: Profile::Achiever,
            },
        ],
    },
    BehavioralQuestion {
        number: 5,
        text: "How do you see yourself in relation to feelings?",
        options: [
            BehavioralOption {
                text: "I am intense and deep, often feeling something is missing in me (envy, dissatisfaction).",
                profile: Profile::Individualist,
            },
            BehavioralOption {
                text: "I prefer to hold feelings in and conserve energy (avarice).",
                profile: Profile::Observer,
            },
            BehavioralOption {
                text: "I feel fear or anxiety about the future and its risks (fear).",
                profile: Profile::Loyalist,
            },
        ],
    },
    BehavioralQuestion {
        number: 6,
        text: "Which phrase best defines your personal pursuit?",
        options: [
            BehavioralOption {
                text: "Seeking pleasure and avoiding pain or boredom (gluttony for novelty).",
                profile: Profile::Enthusiast,
            },
            BehavioralOption {
                text: "Exerting dominance and strength, never showing weakness (lust, excess).",
                profile: Profile::Challenger,
            },
            BehavioralOption {
                text: "Keeping the peace and avoiding conflict at any cost (sloth to confront).",
                profile: Profile::Peacemaker,
            },
        ],
    },
    BehavioralQuestion {
        number: 7,
        text: "At work, how do you lead or prefer to be led?",
        options: [
            BehavioralOption {
                text: "Focused on detail, meritocracy and duty before pleasure.",
                profile: Profile::Perfectionist,
            },
            BehavioralOption {
                text: "Focused on people, building a welcoming, mutually helpful environment.",
                profile: Profile::Helper,
            },
            BehavioralOption {
                text: "Fully focused on goals, fast results and efficiency.",
                profile: Profile::Achiever,
            },
        ],
    },
    BehavioralQuestion {
        number: 8,
        text: "What is your deepest wound or unconscious fear?",
        options: [
            BehavioralOption {
                text: "Feeling ordinary, without a unique identity.",
                profile: Profile::Individualist,
            },
            BehavioralOption {
                text: "Feeling invaded or short of knowledge.",
                profile: Profile::Observer,
            },
            BehavioralOption {
                text: "Feeling unprotected, without support or security.",
                profile: Profile::Loyalist,
            },
        ],
    },
    BehavioralQuestion {
        number: 9,
        text: "How do you handle pain or hard problems?",
        options: [
            BehavioralOption {
                text: "I escape the pain through distractions, future plans and optimism.",
                profile: Profile::Enthusiast,
            },
            BehavioralOption {
                text: "I deny the pain and weakness, facing the problem head-on with strength.",
                profile: Profile::Challenger,
            },
            BehavioralOption {
                text: "I numb my mind, procrastinate or pretend the problem is not that serious.",
                profile: Profile::Peacemaker,
            },
        ],
    },
    BehavioralQuestion {
        number: 10,
        text: "What do you expect from the people around you?",
        options: [
            BehavioralOption {
                text: "That they follow the rules and do things perfectly.",
                profile: Profile::Perfectionist,
            },
            BehavioralOption {
                text: "That they recognize my effort and like me.",
                profile: Profile::Helper,
            },
            BehavioralOption {
                text: "That they recognize my competence and my success.",
                profile: Profile::Achiever,
            },
        ],
    },
    BehavioralQuestion {
        number: 11,
        text: "What is your predominant communication style?",
        options: [
            BehavioralOption {
                text: "Dramatic, authentic and focused on what is missing.",
                profile: Profile::Individualist,
            },
            BehavioralOption {
                text: "Logical, analytical, reserved and focused on information.",
                profile: Profile::Observer,
            },
            BehavioralOption {
                text: "Skeptical, questioning and focused on spotting risks.",
                profile: Profile::Loyalist,
            },
        ],
    },
    BehavioralQuestion {
        number: 12,
        text: "Facing a hard decision, you:",
        options: [
            BehavioralOption {
                text: "Decide fast, based on what brings immediate pleasure or satisfaction.",
                profile: Profile::Enthusiast,
            },
            BehavioralOption {
                text: "Decide fast, on instinct and the urge to control the situation.",
                profile: Profile::Challenger,
            },
            BehavioralOption {
                text: "Take your time, seeking consensus and avoiding displeasing anyone.",
                profile: Profile::Peacemaker,
            },
        ],
    },
    BehavioralQuestion {
        number: 13,
        text: "What is your natural radar, the thing you notice first?",
        options: [
            BehavioralOption {
                text: "The mistake and whatever needs correcting.",
                profile: Profile::Perfectionist,
            },
            BehavioralOption {
                text: "The needs of other people.",
                profile: Profile::Helper,
            },
            BehavioralOption {
                text: "The opportunities for success and recognition.",
                profile: Profile::Achiever,
            },
        ],
    },
    BehavioralQuestion {
        number: 14,
        text: "Which gift do you believe is strongest in you?",
        options: [
            BehavioralOption {
                text: "Creativity, sensitivity and depth.",
                profile: Profile::Individualist,
            },
            BehavioralOption {
                text: "Analytical ability, technical knowledge and strategy.",
                profile: Profile::Observer,
            },
            BehavioralOption {
                text: "Planning, loyalty and risk anticipation.",
                profile: Profile::Loyalist,
            },
        ],
    },
    BehavioralQuestion {
        number: 15,
        text: "What is your attitude toward conflict?",
        options: [
            BehavioralOption {
                text: "I reframe the situation to see the upside and avoid negativity.",
                profile: Profile::Enthusiast,
            },
            BehavioralOption {
                text: "I like direct confrontation, putting everything on the table is healthy.",
                profile: Profile::Challenger,
            },
            BehavioralOption {
                text: "I act as a mediator, hearing both sides and seeking peace.",
                profile: Profile::Peacemaker,
            },
        ],
    },
];

pub fn behavioral_questions() -> &'static [BehavioralQuestion; 15] {
    &BEHAVIORAL_QUESTIONS
}
